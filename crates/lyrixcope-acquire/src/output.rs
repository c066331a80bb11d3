use crate::normalize;
use anyhow::{Context, Result};
use lyrixcope_model::{AggregateResult, SongCandidate};
use std::fs;
use std::path::Path;

/// Write an aggregate result to the given directory.
///
/// Creates the directory if it doesn't exist, then writes:
/// - `song.json`: the full result
/// - `lyrics.txt`: normalized lyric text, when lyrics were scraped
/// - `source.md`: provenance, when a song was found
pub fn write_result(result: &AggregateResult, output_dir: &str) -> Result<()> {
    let dir = Path::new(output_dir);
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {output_dir}"))?;

    let json = serde_json::to_string_pretty(result)?;
    let path = dir.join("song.json");
    fs::write(&path, &json)?;
    tracing::info!(path = %path.display(), status = result.status.code(), "Wrote song JSON");

    if let Some(lyrics) = &result.lyrics {
        let text = normalize::normalize_lyrics(lyrics);
        let path = dir.join("lyrics.txt");
        fs::write(&path, &text)?;
        tracing::info!(path = %path.display(), lines = text.lines().count(), "Wrote lyrics");
    }

    if let Some(song) = &result.song {
        let fetched_at = chrono::Utc::now().to_rfc3339();
        let path = dir.join("source.md");
        fs::write(&path, source_md(song, &fetched_at))?;
        tracing::info!(path = %path.display(), "Wrote source provenance");
    }

    Ok(())
}

fn source_md(song: &SongCandidate, fetched_at: &str) -> String {
    format!(
        "# Source\n\n\
         - **Song:** {}\n\
         - **Artist:** {} ({})\n\
         - **Album:** {} ({})\n\
         - **URL:** {}\n\
         - **Fetched:** {}\n",
        song.song,
        song.artist,
        song.artist_link,
        song.album,
        song.album_link,
        song.song_link,
        fetched_at,
    )
}
