//! # Blogcode Infrastructure
//!
//! Concrete implementations of the ports defined in `blogcode-core`:
//! the SeaORM repository and connection handling, the reqwest client for the
//! internal read API, and the tokio-driven enquiry popup controller.

pub mod database;
pub mod http;
pub mod popup;

pub use database::{
    DatabaseConfig, DatabaseHandle, PostgresBlogRepository, normalize_database_url,
};
pub use http::HttpBlogReadApi;
pub use popup::{MemoryAutoOpenStore, PopupController, PopupSignal};
