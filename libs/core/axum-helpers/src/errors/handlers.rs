use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback for unmatched routes, answered with the error envelope.
pub async fn not_found() -> Response {
    AppError::NotFound("The requested resource was not found".to_string()).into_response()
}
