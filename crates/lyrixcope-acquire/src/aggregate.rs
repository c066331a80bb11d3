use crate::client::LyricsClient;
use lyrixcope_model::{AggregateResult, LookupResult, Status};

impl LyricsClient {
    /// Look up a song and, when found, scrape its lyrics.
    ///
    /// The lyric page is only fetched for a 200 lookup.
    pub async fn aggregate(&self, song_name: &str, artist_name: Option<&str>) -> AggregateResult {
        match self.lookup(song_name, artist_name).await {
            LookupResult {
                status: Status::Ok,
                song: Some(song),
            } => {
                let lyrics = self.scrape(&song.song_link).await;
                tracing::info!(
                    song = %song.song,
                    lines = ?lyrics.as_deref().map(|l| l.lines().count()),
                    "Fetched lyrics"
                );
                AggregateResult {
                    status: Status::Ok,
                    song: Some(song),
                    lyrics,
                }
            }
            other => AggregateResult::from_failed_lookup(&other),
        }
    }
}
