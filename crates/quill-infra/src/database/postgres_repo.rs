//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use quill_core::domain::{NewPost, Page, Post};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn paginate(&self, page: u64, per_page: u64) -> Result<Page<Post>, RepoError> {
        let per_page = per_page.max(1);
        let paginator = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await.map_err(query_error)?;

        // The paginator multiplies page by size unchecked; pages past the end
        // never reach it.
        let index = page.saturating_sub(1);
        let in_range = index
            .checked_mul(per_page)
            .is_some_and(|offset| offset < total && i64::try_from(offset).is_ok());

        let items = if in_range {
            let models = paginator.fetch_page(index).await.map_err(query_error)?;
            models.into_iter().map(Into::into).collect()
        } else {
            Vec::new()
        };

        Ok(Page {
            items,
            page,
            per_page,
            total,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = id, "Finding post by id");

        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let active_model = post::ActiveModel {
            title: Set(post.title),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(query_error)?;
        Ok(model.into())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let active_model = post::ActiveModel {
            id: Unchanged(post.id),
            title: Set(post.title),
            created_at: Unchanged(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        };

        let model = active_model.update(&self.db).await.map_err(query_error)?;
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
