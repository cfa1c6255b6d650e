use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the database connection.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection string, already passed through the normalizer.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// SQL statement logging - verbose in development, errors-only otherwise.
    pub sqlx_logging: bool,
}

/// The one long-lived database resource of the process.
///
/// Constructed once by the composition root and shared by reference; there
/// is no hidden process-global slot. `close` consumes the handle so a closed
/// connection can never be reused.
pub struct DatabaseHandle {
    conn: DbConn,
}

impl DatabaseHandle {
    /// Open the connection pool.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Connecting to database...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(config.sqlx_logging)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(pool = config.max_connections, "Database connected");

        Ok(Self { conn })
    }

    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// Clean shutdown. Only explicit callers (the diagnostic binary) close;
    /// the server keeps the handle for the life of the process.
    pub async fn close(self) -> Result<(), DbErr> {
        self.conn.close().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}
