//! Query-string extractor with the uniform error body on rejection.

use crate::errors::ApiError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Query extractor whose rejection renders the shared [`ErrorResponse`]
/// body instead of axum's plain-text 400.
///
/// [`ErrorResponse`]: crate::errors::ErrorResponse
///
/// # Example
/// ```ignore
/// use axum_helpers::FilterQuery;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Filter {
///     category: Option<String>,
/// }
///
/// async fn list(FilterQuery(filter): FilterQuery<Filter>) { /* ... */ }
/// ```
pub struct FilterQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for FilterQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()).into_response())?;

        Ok(FilterQuery(value))
    }
}
