use serde::{Deserialize, Serialize};

/// One song entry returned by the lyrics search API.
///
/// Field names on the wire are hyphenated (`song-link`, `artist-link`,
/// `album-link`). Keys the API omits come back as empty strings; keys this
/// type doesn't know about are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SongCandidate {
    /// Song title as listed by the API (e.g., "A Man Without Love").
    #[serde(default)]
    pub song: String,
    /// URL of the lyric detail page.
    #[serde(default, rename = "song-link")]
    pub song_link: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default, rename = "artist-link")]
    pub artist_link: String,
    #[serde(default)]
    pub album: String,
    #[serde(default, rename = "album-link")]
    pub album_link: String,
}

impl SongCandidate {
    /// True if the lowercased artist contains any of the given lowercase tokens.
    ///
    /// An empty token is contained in every artist name.
    pub fn artist_matches_any(&self, tokens: &[String]) -> bool {
        let artist = self.artist.to_lowercase();
        tokens.iter().any(|token| artist.contains(token.as_str()))
    }
}

/// Split an artist query into lowercase tokens on the space character.
///
/// Empty input yields a single empty token, and runs of spaces yield empty
/// tokens in between, so a blank query matches every candidate.
pub fn artist_tokens(artist_name: &str) -> Vec<String> {
    artist_name
        .to_lowercase()
        .split(' ')
        .map(str::to_string)
        .collect()
}

/// Pick the best candidate for an artist query.
///
/// Returns the first candidate (in API order) whose artist contains any query
/// token, falling back to the first candidate overall. `None` only when the
/// list is empty.
pub fn select_candidate<'a>(
    candidates: &'a [SongCandidate],
    artist_name: &str,
) -> Option<&'a SongCandidate> {
    let tokens = artist_tokens(artist_name);
    candidates
        .iter()
        .find(|c| c.artist_matches_any(&tokens))
        .or_else(|| candidates.first())
}
