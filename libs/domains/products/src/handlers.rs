use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{errors::handlers::method_not_allowed, ErrorResponse, FilterQuery, IdPath};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, ProductPayload};
use crate::repository::ProductRepository;
use crate::service::ProductService;

const TAG: &str = "products";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(Product, ProductPayload, ErrorResponse)),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
        .method_not_allowed_fallback(method_not_allowed)
}

/// List products, optionally narrowed by one equality filter
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ProductFilter),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 400, description = "Malformed filter value", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    FilterQuery(filter): FilterQuery<ProductFilter>,
) -> ProductResult<Json<Vec<Product>>> {
    tracing::info!("Request for product list");
    let products = service.list_products(filter).await?;
    Ok(Json(products))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "URL of the created product"))),
        (status = 400, description = "Malformed or incomplete body", body = ErrorResponse),
        (status = 415, description = "Body is not application/json", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    headers: HeaderMap,
    body: Bytes,
) -> ProductResult<impl IntoResponse> {
    tracing::info!("Request to create a product");
    check_content_type(&headers)?;

    let payload = ProductPayload::from_json(&body)?;
    let product = service.create_product(payload).await?;

    let id = product
        .id
        .ok_or_else(|| ProductError::Storage("created product has no id".to_string()))?;
    let location = format!("/products/{}", id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Retrieve a single product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<Product>> {
    tracing::info!(product_id = id, "Request for product");
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Replace the business fields of an existing product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product id")),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Malformed or incomplete body", body = ErrorResponse),
        (status = 404, description = "No product with this id", body = ErrorResponse),
        (status = 415, description = "Body is not application/json", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    headers: HeaderMap,
    body: Bytes,
) -> ProductResult<Json<Product>> {
    tracing::info!(product_id = id, "Request to update product");
    check_content_type(&headers)?;

    // Existence is checked before the body is parsed, so an unknown id
    // reports 404 even when the body is invalid
    service.get_product(id).await?;

    let payload = ProductPayload::from_json(&body)?;
    let product = service.update_product(id, payload).await?;
    Ok(Json(product))
}

/// Delete a product; removing an absent id is still 204
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product no longer exists"),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    tracing::info!(product_id = id, "Request to delete product");
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reject write requests whose body is not declared as JSON.
///
/// Parameters after a `;` (e.g. `charset=utf-8`) are tolerated.
fn check_content_type(headers: &HeaderMap) -> ProductResult<()> {
    const JSON: &str = "application/json";

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();

    if media_type.eq_ignore_ascii_case(JSON) {
        return Ok(());
    }

    tracing::error!("Invalid Content-Type: {}", content_type);
    Err(ProductError::UnsupportedMediaType(JSON.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_content_type_accepts_json() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        assert!(check_content_type(&headers).is_ok());

        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        assert!(check_content_type(&headers).is_ok());
    }

    #[test]
    fn test_check_content_type_rejects_other_media_types() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        let err = check_content_type(&headers).unwrap_err();
        assert!(matches!(err, ProductError::UnsupportedMediaType(_)));
    }

    #[test]
    fn test_check_content_type_rejects_missing_header() {
        let err = check_content_type(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ProductError::UnsupportedMediaType(_)));
    }
}
