use crate::config::ApiConfig;
use crate::fetch;
use anyhow::Result;

/// Client for the lyrics search API and lyric pages.
///
/// Holds the API credentials and a reusable HTTP connection pool. Lookups
/// borrow the client, so credentials can only change between calls.
#[derive(Debug, Clone)]
pub struct LyricsClient {
    pub(crate) config: ApiConfig,
    pub(crate) http: reqwest::Client,
}

impl LyricsClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self::with_http_client(config, fetch::build_http_client()?))
    }

    /// Use a caller-built HTTP client (custom proxy, TLS or timeout settings).
    pub fn with_http_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// A client with no credentials; every lookup fails until `configure` is called.
    pub fn unconfigured() -> Result<Self> {
        Self::new(ApiConfig::default())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Set the API user id and token, replacing any previous credentials.
    pub fn configure(&mut self, user_id: impl Into<String>, api_key: impl Into<String>) {
        self.config.set_credentials(user_id, api_key);
        tracing::debug!(endpoint = %self.config.endpoint, "Configured lyrics API credentials");
    }
}
