use anyhow::{Context, Result};

pub(crate) const USER_AGENT: &str = concat!("lyrixcope/", env!("CARGO_PKG_VERSION"), " (lyrics lookup tool)");

pub(crate) fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}

/// GET a page and return its body, failing on non-success statuses.
pub(crate) async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {url}"))?;

    let status = response.status();
    anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

    response.text().await.context("Failed to read response body")
}
