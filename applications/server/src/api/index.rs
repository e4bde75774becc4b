/// Root greeting and unmatched-route fallback
use crate::error::ServerError;

/// GET /
pub async fn index() -> &'static str {
    "Hello World!"
}

/// Any route without a handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound("Route not found".to_string())
}
