use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sqlx::Error as SqlxError;

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Error type returned by every handler. Serializes as `{"message": ...}`
/// with the carried status code.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Generic 500. The underlying cause is logged at the point of failure,
    /// never echoed to the client.
    pub fn internal() -> Self {
        AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody { message: self.message };
        (self.status, Json(body)).into_response()
    }
}

impl From<(StatusCode, String)> for AppError {
    fn from((status, msg): (StatusCode, String)) -> Self {
        AppError::new(status, msg)
    }
}

// Row lookups go through fetch_optional, so a sqlx error reaching this point
// is a storage fault rather than a missing record.
impl From<SqlxError> for AppError {
    fn from(e: SqlxError) -> Self {
        tracing::error!("storage error: {}", e);
        AppError::internal()
    }
}
