//! API routes module

pub mod health;
pub mod index;

use axum::Router;
use database::postgres::DatabaseConnection;
use domain_products::{handlers, ProductRepository, ProductService};

/// Create all API routes
pub fn routes<R: ProductRepository + 'static>(
    service: ProductService<R>,
    db: DatabaseConnection,
) -> Router {
    Router::new()
        .merge(index::router())
        .merge(health::router(db))
        .nest("/products", handlers::router(service))
}
