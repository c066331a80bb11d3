use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Outcome code of a lookup, mirroring the HTTP-style codes callers branch on.
///
/// Serializes as the bare integer (e.g., `200`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Status {
    /// Initial value before a lookup runs. Not produced by a completed lookup.
    #[default]
    Unset,
    /// The API reported an error in its payload.
    ApiError,
    /// The API returned an empty result.
    NotFound,
    /// A candidate was found or defaulted.
    Ok,
    /// Missing credentials, network failure, or a malformed payload.
    Failed,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown status code: {0}")]
pub struct UnknownStatus(pub u16);

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Unset => 400,
            Status::ApiError => 403,
            Status::NotFound => 404,
            Status::Ok => 200,
            Status::Failed => 500,
        }
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl TryFrom<u16> for Status {
    type Error = UnknownStatus;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            400 => Ok(Status::Unset),
            403 => Ok(Status::ApiError),
            404 => Ok(Status::NotFound),
            200 => Ok(Status::Ok),
            500 => Ok(Status::Failed),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Status::NotFound).unwrap(), "404");
        let status: Status = serde_json::from_str("403").unwrap();
        assert_eq!(status, Status::ApiError);
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(Status::try_from(418), Err(UnknownStatus(418)));
        assert!(serde_json::from_str::<Status>("302").is_err());
    }

    #[test]
    fn test_default_is_400() {
        assert_eq!(Status::default().code(), 400);
        assert!(!Status::default().is_ok());
    }
}
