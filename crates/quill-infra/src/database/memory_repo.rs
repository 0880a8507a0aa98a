//! In-memory post repository - used when no database is configured, and in tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Page, Post};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// Post store backed by an ordered map.
///
/// Ids are allocated from a counter starting at 1 and are never reused.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<BTreeMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn paginate(&self, page: u64, per_page: u64) -> Result<Page<Post>, RepoError> {
        let posts = self.posts.read().await;
        let offset = page.saturating_sub(1).saturating_mul(per_page);

        let items = posts
            .values()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(per_page).unwrap_or(usize::MAX))
            .cloned()
            .collect();

        Ok(Page {
            items,
            page,
            per_page,
            total: posts.len() as u64,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            title: post.title,
            created_at: now,
            updated_at: now,
        };

        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let stored = posts.get_mut(&post.id).ok_or(RepoError::NotFound)?;

        stored.title = post.title;
        stored.updated_at = post.updated_at;

        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.posts
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryPostRepository::new();

        let first = repo.create(NewPost::new("first".to_string())).await.unwrap();
        let second = repo.create(NewPost::new("second".to_string())).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryPostRepository::new();

        let first = repo.create(NewPost::new("first".to_string())).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.create(NewPost::new("second".to_string())).await.unwrap();

        assert_eq!(second.id, 2);
        assert!(repo.find_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_only_touches_title_and_updated_at() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(NewPost::new("before".to_string())).await.unwrap();

        let mut changed = created.clone();
        changed.retitle("after".to_string());
        changed.created_at = Utc::now() + chrono::TimeDelta::days(1);
        let updated = repo.update(changed).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "after");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_post() {
        let repo = InMemoryPostRepository::new();
        let ghost = Post {
            id: 1000,
            title: "ghost".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(matches!(
            repo.update(ghost).await.unwrap_err(),
            RepoError::NotFound
        ));
        assert!(matches!(
            repo.delete(1000).await.unwrap_err(),
            RepoError::NotFound
        ));
    }

    #[tokio::test]
    async fn test_paginate_in_insertion_order() {
        let repo = InMemoryPostRepository::new();
        for i in 1..=5 {
            repo.create(NewPost::new(format!("post {i}"))).await.unwrap();
        }

        let page = repo.paginate(2, 2).await.unwrap();
        let titles: Vec<_> = page.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["post 3", "post 4"]);
        assert_eq!(page.total, 5);
        assert_eq!(page.last_page(), 3);

        let past_end = repo.paginate(9, 2).await.unwrap();
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 5);
    }
}
