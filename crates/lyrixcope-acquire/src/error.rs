use lyrixcope_model::Status;
use thiserror::Error;

/// Why a song lookup produced no candidate.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("API not configured: call configure(user_id, api_key) first")]
    NotConfigured,

    #[error("no results for '{0}'")]
    NotFound(String),

    #[error("lyrics API reported an error: {0}")]
    Api(String),

    #[error("request to lyrics API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed JSON from lyrics API: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("lyrics API response has no result list")]
    MalformedResponse,
}

impl LookupError {
    /// Status code reported for this failure by `lookup`.
    ///
    /// Missing credentials share 500 with transport and parse failures.
    pub fn status(&self) -> Status {
        match self {
            LookupError::NotFound(_) => Status::NotFound,
            LookupError::Api(_) => Status::ApiError,
            LookupError::NotConfigured
            | LookupError::Transport(_)
            | LookupError::Parse(_)
            | LookupError::MalformedResponse => Status::Failed,
        }
    }
}
