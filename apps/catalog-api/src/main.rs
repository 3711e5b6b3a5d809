//! Catalog API - REST server for the product catalog

use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_products::{PgProductRepository, ProductService};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL at {}", config.postgres.url());
    let db =
        database::postgres::connect_from_config_with_retry(config.postgres.clone(), None).await?;

    let repository = PgProductRepository::new(db.clone());
    repository.ensure_schema().await?;

    let service = ProductService::new(repository);

    let router = create_router::<openapi::ApiDoc>(api::routes(service, db.clone()));

    info!("Starting Catalog API on port {}", config.server.port);
    create_app(router, &config.server).await?;

    info!("Shutting down: closing database connections");
    db.close().await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
