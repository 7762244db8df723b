//! Repost handler.
//!
//! Copies a post in the document store and increments the owning user's
//! repost counter in the relational store through the repost coordinator.
//! Clients get a fixed message body either way; the interesting detail
//! lives in the logs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use postboard_core::repost::RepostError;

use crate::state::AppState;

const CREATED_MESSAGE: &str = "Post created and repost count updated successfully";
const FAILED_MESSAGE: &str = "Error in processing your request";

/// Repost a post on behalf of a user (POST /repost/{user_id}/{id}).
#[axum::debug_handler]
pub async fn repost(
    State(state): State<AppState>,
    Path((user_id, id)): Path<(i32, String)>,
) -> (StatusCode, Json<serde_json::Value>) {
    tracing::debug!(user_id, post_id = %id, "Received repost request");

    match state.repost.execute(user_id, &id).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "message": CREATED_MESSAGE })),
        ),
        Err(err) => {
            // The half-committed case is logged at ERROR by the coordinator.
            if !matches!(err, RepostError::DocumentCommitFailed(_)) {
                tracing::warn!(user_id, post_id = %id, error = %err, "Repost failed");
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": FAILED_MESSAGE })),
            )
        }
    }
}
