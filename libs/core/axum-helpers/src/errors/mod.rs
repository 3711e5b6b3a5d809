pub mod handlers;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Uniform wire shape for error responses.
///
/// Every error status (400/404/405/415/500) renders this body:
///
/// ```json
/// {
///   "status": 404,
///   "error": "Not Found",
///   "message": "Product with id '42' was not found."
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Numeric HTTP status, repeated in the body
    pub status: u16,
    /// Human-readable reason phrase for the status
    pub error: String,
    /// Description of what went wrong
    pub message: String,
}

/// HTTP-level error type owning the status-code mapping.
///
/// Domain error enums convert into this at the handler boundary so that no
/// error leaves a handler untyped.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Method not Allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad Request",
            ApiError::NotFound(_) => "Not Found",
            ApiError::MethodNotAllowed(_) => "Method not Allowed",
            ApiError::UnsupportedMediaType(_) => "Unsupported media type",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }

    fn message(self) -> String {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::MethodNotAllowed(msg)
            | ApiError::UnsupportedMediaType(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let label = self.label();
        let message = self.message();

        // Server faults are errors; client faults are warnings
        if status.is_server_error() {
            tracing::error!("{label}: {message}");
        } else {
            tracing::warn!("{label}: {message}");
        }

        let body = Json(ErrorResponse {
            status: status.as_u16(),
            error: label.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_body_shape() {
        let response = ApiError::NotFound("Product with id '99' was not found.".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Product with id '99' was not found.");
    }

    #[tokio::test]
    async fn test_unsupported_media_type_status() {
        let response =
            ApiError::UnsupportedMediaType("Content-Type must be application/json".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Unsupported media type");
    }

    #[tokio::test]
    async fn test_internal_error_status() {
        let response = ApiError::Internal("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["status"], 500);
        assert_eq!(body["error"], "Internal Server Error");
    }
}
