//! Root informational document

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct IndexResponse {
    name: String,
    version: String,
    paths: String,
}

/// Root URL response: service name, version, and where the resources live
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: "Product Catalog REST API Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        paths: "/products".to_string(),
    })
}

pub fn router() -> Router {
    Router::new().route("/", get(index))
}
