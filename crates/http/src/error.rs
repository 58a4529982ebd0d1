//! Error handling for the bookshelf HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Wire shape of every error payload.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Application error types that map to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {message}")]
    NotFound { message: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

impl From<bookshelf_store::StoreError> for AppError {
    fn from(error: bookshelf_store::StoreError) -> Self {
        Self::Internal(error.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal(error) => {
                tracing::error!(%error, "request failed");

                // Hide internal details outside debug builds.
                let message = if cfg!(debug_assertions) {
                    error.to_string()
                } else {
                    "An internal server error occurred".to_string()
                };

                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::not_found("Record is not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn internal_maps_to_500() {
        let error = AppError::Internal(anyhow::anyhow!("database connection failed"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_errors_become_internal() {
        let error: AppError = bookshelf_store::StoreError::Backend("disk full".to_string()).into();
        assert!(matches!(error, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn not_found_body_carries_only_the_message() {
        let response = AppError::not_found("Record is not found").into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body, serde_json::json!({"message": "Record is not found"}));
    }
}
