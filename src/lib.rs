//! # dicto
//!
//! Look up a word on Weblio, extract the interesting parts of the page and
//! print them as plain lines.
//!
//! ## Architecture
//!
//! - [`fetch`]: URL building, bounded GET, HTML parsing
//! - [`document`]: read-only queries over the parsed page
//! - [`extract`]: per-dictionary selector tables and fallbacks
//! - [`render`]: ordered output lines and pluggable styling
//! - [`dictionary`]: the fetch, extract, render pipeline
//! - [`models`]: records passed from extraction to rendering
//! - [`config`]: base URLs, timeout, user agent
//! - [`utils`]: HTTP client

pub mod config;
pub mod dictionary;
pub mod document;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod render;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use dictionary::{Dictionary, Lookup, LookupError};
pub use fetch::FetchError;
pub use models::DictionaryRecord;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
