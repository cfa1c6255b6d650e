//! Application configuration loaded from environment variables.

use std::env;

use blogcode_infra::database::{DatabaseConfig, normalize_database_url};

use crate::base_url::BaseUrls;

/// Deployment environment, from `NODE_ENV`. Anything but `production`
/// counts as development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        match env::var("NODE_ENV").as_deref() {
            Ok("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub database: Option<DatabaseConfig>,
    pub base_urls: BaseUrls,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();

        let database = env::var("DATABASE_URL").ok().map(|raw| DatabaseConfig {
            url: normalize_database_url(&raw),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            // Verbose SQL logging in development, errors-only in production.
            sqlx_logging: !environment.is_production(),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment,
            database,
            base_urls: BaseUrls::from_env(environment),
        }
    }
}
