//! # Blogcode Core
//!
//! The domain layer of the Blogcode content system.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the blog post entity with its SEO fallback rules, structured-data synthesis,
//! the enquiry popup state machine, and the ports the outer layers implement.

pub mod domain;
pub mod error;
pub mod popup;
pub mod ports;
pub mod seo;

pub use error::RepoError;
