//! shop-api error types

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Core shop API error type
#[derive(thiserror::Error, Debug)]
pub enum ShopApiError {
    /// Error returned when a database connection or query fails
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
    /// Error returned when the metrics registry cannot be encoded into the
    /// text exposition format
    #[error("Failed to encode metrics: {0}")]
    MetricsEncoding(#[from] std::fmt::Error),
    /// Error returned when an HTTP response cannot be built
    #[error("Failed to build response: {0}")]
    Http(#[from] axum::http::Error),
    /// Std IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shop API result type.
pub type ShopApiResult<T> = Result<T, ShopApiError>;

/// Error format returned to the caller.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    /// The error message
    pub error: String,
}

impl From<String> for ErrorResponse {
    fn from(value: String) -> Self {
        Self { error: value }
    }
}

impl ShopApiError {
    /// Convert error into HTTP status code and error message.
    ///
    /// Database failures collapse into the constant "DB error" body; driver
    /// messages never reach the caller.
    pub fn into_status_code_and_body(self) -> (StatusCode, String) {
        match self {
            ShopApiError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DB error".to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong".to_string(),
            ),
        }
    }
}

impl IntoResponse for ShopApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, body) = self.into_status_code_and_body();
        (status_code, Json(ErrorResponse::from(body))).into_response()
    }
}
