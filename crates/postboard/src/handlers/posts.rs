//! Post CRUD handlers.
//!
//! Reads go through the cached listing; writes hit the document store
//! directly and invalidate the cached listing afterwards.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use postboard_core::cache::POSTS_LISTING;
use postboard_core::posts::{Post, PostDraft};
use postboard_core::storage::StorageError;

use crate::{handlers::AppError, state::AppState};

/// List all posts (GET /posts).
///
/// Served from the cache when a fresh listing is available.
#[axum::debug_handler]
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, AppError> {
    let posts = state.listing.get().await?;

    Ok(Json(posts))
}

/// Create a new post (POST /posts).
#[axum::debug_handler]
pub async fn create_post(
    State(state): State<AppState>,
    Json(draft): Json<PostDraft>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    tracing::debug!(title = %draft.title, "Received create post request");

    let post = state.posts.create_post(&draft).await?;
    state.cache.invalidate(POSTS_LISTING).await;

    tracing::info!(post_id = %post.id, title = %post.title, "Created new post");

    Ok((StatusCode::CREATED, Json(post)))
}

/// Update a post by ID (PUT /posts/{id}).
#[axum::debug_handler]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<PostDraft>,
) -> Result<Json<Post>, AppError> {
    tracing::debug!(post_id = %id, "Received update post request");

    let post = state
        .posts
        .update_post(&id, &draft)
        .await?
        .ok_or(StorageError::NotFound {
            entity_type: "Post",
            id,
        })?;
    state.cache.invalidate(POSTS_LISTING).await;

    tracing::info!(post_id = %post.id, "Updated post");

    Ok(Json(post))
}
