//! PostgreSQL connector and utilities
//!
//! Provides connection management, startup retry, health checks, and
//! schema bootstrap for Sea-ORM entities.

mod config;
mod connector;
mod health;

pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    connect_with_retry, ensure_table,
};
pub use health::check_health;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
