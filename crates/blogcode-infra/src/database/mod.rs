//! Database access: connection-string normalization, the explicit
//! connection handle, and the SeaORM blog repository.

pub mod conn_url;
mod connection;
pub mod entity;
pub mod postgres_repo;

pub use conn_url::normalize_database_url;
pub use connection::{DatabaseConfig, DatabaseHandle};
pub use postgres_repo::PostgresBlogRepository;
