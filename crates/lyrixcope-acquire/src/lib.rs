//! Song lookup against the stands4 lyrics search API and lyric text
//! scraping from lyrics.com detail pages.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod output;
pub mod scrape;

mod fetch;

#[cfg(test)]
mod stub_server;

pub use client::LyricsClient;
pub use config::ApiConfig;
pub use error::LookupError;
