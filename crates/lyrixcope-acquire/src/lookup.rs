use crate::client::LyricsClient;
use crate::error::LookupError;
use lyrixcope_model::{select_candidate, LookupResult, SongCandidate, Status};
use serde_json::Value;

/// Raw body the search API sends when nothing matched.
const EMPTY_RESULT_BODY: &str = "{}";

impl LyricsClient {
    /// Search the API for `song_name` and pick the candidate best matching `artist_name`.
    ///
    /// A missing artist behaves like an empty one, which selects the first result.
    pub async fn search(
        &self,
        song_name: &str,
        artist_name: Option<&str>,
    ) -> Result<SongCandidate, LookupError> {
        let artist_name = artist_name.unwrap_or("");
        let (user_id, token) = self
            .config
            .credentials()
            .ok_or(LookupError::NotConfigured)?;

        tracing::info!(term = %song_name, artist = %artist_name, "Searching lyrics API");
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("uid", user_id),
                ("tokenid", token),
                ("term", song_name),
                ("format", self.config.format.as_str()),
            ])
            .send()
            .await?;
        let body = response.text().await?;
        tracing::debug!(bytes = body.len(), "Received search response");

        interpret_response(&body, song_name, artist_name)
    }

    /// Look up a song and report the outcome as a status code.
    ///
    /// Never fails: every error is logged and folded into `status`.
    pub async fn lookup(&self, song_name: &str, artist_name: Option<&str>) -> LookupResult {
        match self.search(song_name, artist_name).await {
            Ok(song) => {
                tracing::info!(song = %song.song, artist = %song.artist, link = %song.song_link, "Selected song");
                LookupResult::found(song)
            }
            Err(err) => {
                let status = err.status();
                if status == Status::Failed {
                    tracing::error!(term = %song_name, error = %err, "Song lookup failed");
                } else {
                    tracing::warn!(term = %song_name, status = status.code(), error = %err, "No song selected");
                }
                LookupResult::failed(status)
            }
        }
    }
}

/// Turn a raw search response body into the selected candidate.
pub fn interpret_response(
    body: &str,
    term: &str,
    artist_name: &str,
) -> Result<SongCandidate, LookupError> {
    if body == EMPTY_RESULT_BODY {
        return Err(LookupError::NotFound(term.to_string()));
    }

    let mut payload: Value = serde_json::from_str(body)?;

    if let Some(error) = payload.get("error").filter(|e| is_truthy(e)) {
        return Err(LookupError::Api(describe(error)));
    }

    let result = payload
        .get_mut("result")
        .map(Value::take)
        .ok_or(LookupError::MalformedResponse)?;
    let candidates: Vec<SongCandidate> = serde_json::from_value(result)?;
    tracing::debug!(candidates = candidates.len(), "Parsed search results");

    select_candidate(&candidates, artist_name)
        .cloned()
        .ok_or_else(|| LookupError::NotFound(term.to_string()))
}

/// JSON truthiness: null, false, zero and the empty string are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn describe(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
