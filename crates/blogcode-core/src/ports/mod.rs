mod read_api;
mod repository;

pub use read_api::BlogReadApi;
pub use repository::BlogRepository;
