//! Configuration management.
//!
//! There is no configuration file: a [`Config`] is built by the caller (the
//! binary, or a test pointing the lookup at a local server) and handed to the
//! pieces that need it.

use std::time::Duration;

/// Base URL of the monolingual (Japanese) dictionary.
pub const MONOLINGUAL_BASE_URL: &str = "https://www.weblio.jp/content/";

/// Base URL of the bilingual (Japanese-English) dictionary.
pub const BILINGUAL_BASE_URL: &str = "https://ejje.weblio.jp/content/";

/// Network timeout for a single lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix the word is appended to for monolingual lookups
    pub monolingual_base_url: String,

    /// Prefix the word is appended to for bilingual lookups
    pub bilingual_base_url: String,

    /// Upper bound for the whole fetch (connect, status, body)
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            monolingual_base_url: MONOLINGUAL_BASE_URL.to_string(),
            bilingual_base_url: BILINGUAL_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Set the monolingual base URL
    pub fn monolingual_base_url(mut self, url: impl Into<String>) -> Self {
        self.monolingual_base_url = url.into();
        self
    }

    /// Set the bilingual base URL
    pub fn bilingual_base_url(mut self, url: impl Into<String>) -> Self {
        self.bilingual_base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}
