//! Utility modules supporting lookups.
//!
//! - [`HttpClient`]: caller-owned HTTP client configured from a [`Config`](crate::config::Config)

mod http;

pub use http::HttpClient;
