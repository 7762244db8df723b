use axum::Json;

/// GET /health - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
/// Does NOT touch the stores or the cache.
#[axum::debug_handler]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
