use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use postboard_core::storage::{storage_error_to_status_code, StorageError};

/// Error wrapper that lets handlers use `?` on anyhow-compatible errors.
///
/// Storage failures keep their HTTP status through the downcast; any
/// other error answers 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(storage_error) = self.0.downcast_ref::<StorageError>() {
            let code = storage_error_to_status_code(storage_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }

        (
            status_code,
            Json(serde_json::json!({ "message": self.0.to_string() })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err = AppError::from(StorageError::NotFound {
            entity_type: "Post",
            id: "abc".to_string(),
        });

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_timeout_maps_to_504() {
        let err = AppError::from(StorageError::Timeout("find_post".to_string()));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let err = AppError::from(anyhow::anyhow!("something broke"));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
