use async_trait::async_trait;

use crate::domain::{NewPost, Page, Post};
use crate::error::RepoError;

/// Persistence port for posts, keyed by the store-assigned numeric id.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch one page of posts in insertion order.
    ///
    /// `page` is 1-based. A page past the end is empty but still reports `total`.
    async fn paginate(&self, page: u64, per_page: u64) -> Result<Page<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Persist a new post; the store assigns the id and both timestamps.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Write back the mutable fields of an existing post.
    ///
    /// Returns `RepoError::NotFound` if the post no longer exists.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Hard-delete a post.
    ///
    /// Returns `RepoError::NotFound` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
