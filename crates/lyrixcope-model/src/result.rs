use crate::song::SongCandidate;
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// Result of looking up a song on the search API.
///
/// `song` is present exactly when `status` is 200.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub status: Status,
    pub song: Option<SongCandidate>,
}

impl LookupResult {
    pub fn found(song: SongCandidate) -> Self {
        Self {
            status: Status::Ok,
            song: Some(song),
        }
    }

    pub fn failed(status: Status) -> Self {
        Self { status, song: None }
    }
}

/// Combined lookup + scrape outcome.
///
/// When `status` is 200 the song is present and the scraper was attempted;
/// `lyrics` is still `None` if scraping failed. For any other status both
/// `song` and `lyrics` are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub status: Status,
    pub song: Option<SongCandidate>,
    pub lyrics: Option<String>,
}

impl AggregateResult {
    /// Carry a non-200 lookup through unchanged, with no song and no lyrics.
    pub fn from_failed_lookup(lookup: &LookupResult) -> Self {
        Self {
            status: lookup.status,
            song: None,
            lyrics: None,
        }
    }
}
