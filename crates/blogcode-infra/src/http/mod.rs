//! HTTP clients for in-process collaborators.

mod read_api;

pub use read_api::HttpBlogReadApi;
