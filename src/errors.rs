use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BodyParsingError(String),

    /// The underlying store error is logged, never echoed to the caller.
    #[error("Failed to insert log entry")]
    DatabaseError(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::BodyParsingError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let AppError::DatabaseError(ref err) = self {
            tracing::error!(error = %err, "log insert failed");
        }

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
