use axum::response::{IntoResponse, Response};
use axum_helpers::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with id '{0}' was not found.")]
    NotFound(i32),

    #[error("{0}")]
    Validation(String),

    #[error("Content-Type must be {0}")]
    UnsupportedMediaType(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to ApiError for standardized error responses
impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                ApiError::NotFound(format!("Product with id '{}' was not found.", id))
            }
            ProductError::Validation(msg) => ApiError::BadRequest(msg),
            ProductError::UnsupportedMediaType(content_type) => {
                ApiError::UnsupportedMediaType(format!("Content-Type must be {}", content_type))
            }
            ProductError::Storage(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let api_error: ApiError = self.into();
        api_error.into_response()
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Storage(err.to_string())
    }
}
