//! Configuration for Catalog API

use core_config::{server::ServerConfig, Environment, FromEnv};
use database::postgres::PostgresConfig;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub postgres: PostgresConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            postgres: PostgresConfig::from_env()?,
            environment: Environment::from_env(),
        })
    }
}
