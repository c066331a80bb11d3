use std::fmt;

/// Search endpoint of the stands4 lyrics API.
pub const DEFAULT_ENDPOINT: &str = "https://www.stands4.com/services/v2/lyrics.php";

/// Response format requested from the search API.
pub const DEFAULT_FORMAT: &str = "json";

/// Endpoint, credentials and response format used by song lookups.
///
/// Starts without credentials; lookups fail until both `user_id` and `token`
/// are set.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: String,
    pub user_id: Option<String>,
    pub token: Option<String>,
    pub format: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_id: None,
            token: None,
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Config for the default endpoint with the given credentials.
    pub fn new(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.set_credentials(user_id, token);
        config
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Overwrite both credential fields. No validation.
    pub fn set_credentials(&mut self, user_id: impl Into<String>, token: impl Into<String>) {
        self.user_id = Some(user_id.into());
        self.token = Some(token.into());
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    pub(crate) fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.user_id, &self.token) {
            (Some(user_id), Some(token)) => Some((user_id.as_str(), token.as_str())),
            _ => None,
        }
    }
}

// Keep the token out of logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("endpoint", &self.endpoint)
            .field("user_id", &self.user_id)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("format", &self.format)
            .finish()
    }
}
