//! Post resource handlers.
//!
//! Every handler takes [`Identity`] first, so an unauthenticated request is
//! rejected before its path or body is looked at.

use actix_web::{HttpResponse, web};
use chrono::{DateTime, SecondsFormat, Utc};

use quill_core::DomainError;
use quill_core::domain::{NewPost, Page, Post, validate_title};
use quill_shared::dto::{PageMeta, PageQuery, Paginated, PostPayload, PostResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        created_at: timestamp(post.created_at),
        updated_at: timestamp(post.updated_at),
    }
}

fn page_meta<T>(page: &Page<T>) -> PageMeta {
    PageMeta {
        current_page: page.page,
        per_page: page.per_page,
        total: page.total,
        last_page: page.last_page(),
        from: page.from(),
        to: page.to(),
    }
}

async fn find_post(state: &AppState, id: i64) -> AppResult<Post> {
    state.posts.find_by_id(id).await?.ok_or_else(|| {
        DomainError::NotFound {
            entity_type: "Post",
            id,
        }
        .into()
    })
}

/// GET /api/posts
pub async fn index(
    identity: Identity,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .posts
        .paginate(query.page(), query.per_page())
        .await?;

    tracing::debug!(
        user_id = identity.user_id,
        page = page.page,
        total = page.total,
        "Listing posts"
    );

    let meta = page_meta(&page);
    Ok(HttpResponse::Ok().json(Paginated {
        data: page.items.into_iter().map(to_response).collect(),
        meta,
    }))
}

/// POST /api/posts
pub async fn store(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let title = validate_title(body.title.as_deref())?;

    let post = state.posts.create(NewPost::new(title)).await?;
    tracing::info!(user_id = identity.user_id, post_id = post.id, "Post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts/{id}
pub async fn show(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::debug!(user_id = identity.user_id, post_id = id, "Showing post");

    let post = find_post(&state, id).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/posts/{id}
///
/// The post is looked up before the body is validated, so an unknown id is a
/// 404 even when the title is also invalid.
pub async fn update(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, path.into_inner()).await?;
    let title = validate_title(body.title.as_deref())?;

    post.retitle(title);
    let post = state.posts.update(post).await?;
    tracing::info!(user_id = identity.user_id, post_id = post.id, "Post updated");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn destroy(
    identity: Identity,
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;
    tracing::info!(user_id = identity.user_id, post_id = id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let at = Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(timestamp(at), "2020-05-01T12:00:00.000000Z");
    }

    #[test]
    fn test_page_meta() {
        let page = Page {
            items: vec![1, 2],
            page: 3,
            per_page: 2,
            total: 6,
        };
        assert_eq!(
            page_meta(&page),
            PageMeta {
                current_page: 3,
                per_page: 2,
                total: 6,
                last_page: 3,
                from: Some(5),
                to: Some(6),
            }
        );
    }
}
