use crate::client::LyricsClient;
use crate::fetch;
use scraper::{Html, Selector};

/// Element holding the lyric text on a lyrics.com detail page.
const LYRIC_SELECTOR: &str = "pre.lyric-body";

impl LyricsClient {
    /// Fetch a lyric page and return its trimmed lyric text.
    ///
    /// See [`scrape`].
    pub async fn scrape(&self, url: &str) -> Option<String> {
        scrape(&self.http, url).await
    }
}

/// Fetch a lyric page and return its trimmed lyric text.
///
/// A page without a `pre.lyric-body` element yields `Some("")`. Network
/// failures and non-success HTTP statuses are logged and yield `None`.
pub async fn scrape(client: &reqwest::Client, url: &str) -> Option<String> {
    tracing::info!(url = %url, "Fetching lyric page");
    match fetch::fetch_page(client, url).await {
        Ok(html) => {
            tracing::debug!(bytes = html.len(), "Received HTML");
            let lyrics = extract_lyrics(&html);
            if lyrics.is_empty() {
                tracing::warn!(url = %url, "No {LYRIC_SELECTOR} element on page");
            }
            Some(lyrics)
        }
        Err(err) => {
            tracing::error!(url = %url, error = %format!("{err:#}"), "An error occurred while scraping song");
            None
        }
    }
}

/// Extract the text of the first `pre.lyric-body` element, trimmed.
pub fn extract_lyrics(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse(LYRIC_SELECTOR).expect("valid selector");

    document
        .select(&selector)
        .next()
        .map(|pre| pre.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}
