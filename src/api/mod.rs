//! Thin HTTP client over the upstream REST API.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{Item, ResultPage};
