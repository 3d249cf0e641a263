//! HTTP client utilities.

use reqwest::Client;
use std::sync::Arc;

use crate::config::Config;
use crate::fetch::FetchError;

/// HTTP client owned by the caller and shared across lookups
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Create a client from the given configuration
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::RequestBuild(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Get the underlying client
    pub fn client(&self) -> &Client {
        &self.client
    }
}
