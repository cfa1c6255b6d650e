//! Database smoke test.
//!
//! Counts blog records and reports through the exit code: 0 on success,
//! 1 on failure. The database handle is closed on the way out either way.

use anyhow::{Context, Result};

use blogcode_core::ports::BlogRepository;
use blogcode_infra::database::{
    DatabaseConfig, DatabaseHandle, PostgresBlogRepository, normalize_database_url,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    let code = match run().await {
        Ok(count) => {
            println!("Blog count: {count}");
            0
        }
        Err(err) => {
            tracing::error!("Database smoke test failed: {err:#}");
            1
        }
    };

    std::process::exit(code);
}

async fn run() -> Result<u64> {
    let raw_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;

    let config = DatabaseConfig {
        url: normalize_database_url(&raw_url),
        max_connections: 1,
        min_connections: 1,
        sqlx_logging: false,
    };

    let handle = DatabaseHandle::connect(&config)
        .await
        .context("failed to connect to the database")?;

    let result = PostgresBlogRepository::new(handle.conn().clone())
        .count()
        .await;

    // Close before reporting, success or failure.
    if let Err(err) = handle.close().await {
        tracing::warn!("Failed to close database connection: {err}");
    }

    result.context("failed to count blog posts")
}
