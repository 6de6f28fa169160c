//! Environment configuration

use anyhow::{Context, Result};
use tracing::warn;

/// MySQL connection settings, each overridable via environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("MYSQL_HOST").unwrap_or_else(|_| "localhost".to_string());

        let port = match std::env::var("MYSQL_PORT") {
            Ok(raw) => raw.parse().context("Invalid MYSQL_PORT")?,
            Err(_) => 3306,
        };

        let user = std::env::var("MYSQL_USER").unwrap_or_else(|_| "root".to_string());

        let password = std::env::var("MYSQL_PASSWORD").unwrap_or_else(|_| {
            warn!("MYSQL_PASSWORD not set, using default (insecure for production)");
            "yourpassword".to_string()
        });

        let database =
            std::env::var("MYSQL_DATABASE").unwrap_or_else(|_| "aptimaster".to_string());

        Ok(Self {
            host,
            port,
            user,
            password,
            database,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub store: StoreConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        Ok(Self {
            bind_address,
            store: StoreConfig::from_env()?,
        })
    }
}
