pub mod backend;
pub mod client;
pub mod types;

pub use backend::{ApiError, Backend};
pub use client::HttpBackend;
pub use types::{Difficulty, Issue, QueryResponse, Repository};
