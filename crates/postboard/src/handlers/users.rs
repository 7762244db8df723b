//! User CRUD handlers.
//!
//! Users live in the relational store. The cached posts listing is not
//! involved here, so no invalidation happens on these paths.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use postboard_core::storage::StorageError;
use postboard_core::users::User;

use crate::{handlers::AppError, state::AppState};

/// Payload for creating or updating a user.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

/// List all users (GET /users).
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list_users().await?;

    Ok(Json(users))
}

/// Create a new user (POST /users).
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<User>), AppError> {
    tracing::debug!(name = %payload.name, "Received create user request");

    let user = state.users.create_user(&payload.name, &payload.email).await?;

    tracing::info!(user_id = user.id, "Created new user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user by ID (PUT /users/{id}).
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<User>, AppError> {
    tracing::debug!(user_id = id, "Received update user request");

    let user = state
        .users
        .update_user(id, &payload.name, &payload.email)
        .await?
        .ok_or(StorageError::NotFound {
            entity_type: "User",
            id: id.to_string(),
        })?;

    tracing::info!(user_id = user.id, "Updated user");

    Ok(Json(user))
}

/// Increment a user's repost counter by one (PUT /users/increase/{id}).
///
/// Standalone counter bump outside of any repost. The repost flow goes
/// through the coordinator instead so the increment stays transactional.
#[axum::debug_handler]
pub async fn increase_reposts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, AppError> {
    let user = state
        .users
        .increment_reposts(id)
        .await?
        .ok_or(StorageError::NotFound {
            entity_type: "User",
            id: id.to_string(),
        })?;

    tracing::info!(user_id = user.id, reposts = user.reposts, "Increased repost count");

    Ok(Json(user))
}
