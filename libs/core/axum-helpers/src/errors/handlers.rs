use axum::response::{IntoResponse, Response};

use super::ApiError;

/// Fallback handler for requests that match no route.
pub async fn not_found() -> Response {
    ApiError::NotFound("The requested resource was not found".to_string()).into_response()
}

/// Fallback handler for requests whose method is not allowed on a known route.
pub async fn method_not_allowed() -> Response {
    ApiError::MethodNotAllowed("The HTTP method is not allowed for this resource".to_string())
        .into_response()
}
