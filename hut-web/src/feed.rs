//! Spreadsheet feed download.
use crate::dom;
use hut_core::{FeedError, FeedSnapshot};
use thiserror::Error;

/// Where the menu comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: hut_core::feed_url().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FeedLoadError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Response was not valid UTF-8")]
    Utf8,
    #[error("Feed could not be parsed: {0}")]
    Parse(#[from] FeedError),
}

/// Download the CSV export and build the menu and spinner groupings.
///
/// There is no retry; callers show the failure message instead.
///
/// # Errors
/// Network failures, non-2xx responses and malformed CSV.
#[allow(clippy::future_not_send)]
pub async fn fetch_feed(config: &FeedConfig) -> Result<FeedSnapshot, FeedLoadError> {
    let response = dom::fetch_response(&config.url)
        .await
        .map_err(|err| FeedLoadError::Request(dom::js_error_message(&err)))?;

    if !response.ok() {
        return Err(FeedLoadError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let text = dom::response_text(&response)
        .await
        .map_err(|err| FeedLoadError::Request(dom::js_error_message(&err)))?
        .ok_or(FeedLoadError::Utf8)?;

    let snapshot = FeedSnapshot::from_csv(&text)?;
    log::info!(
        "menu feed loaded: {} categories, {} rows",
        snapshot.catalog.len(),
        snapshot.catalog.row_count()
    );
    Ok(snapshot)
}
