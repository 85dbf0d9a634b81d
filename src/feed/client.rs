use std::time::Duration;

use super::error::FeedError;
use super::types::NeoFeed;
use super::window::FeedWindow;

pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the NeoWs feed endpoint.
///
/// One bounded outbound request per `fetch` call, no automatic retries.
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FeedClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Fetch the full window in one request; the feed does not paginate
    /// ranges of up to 7 days.
    pub async fn fetch(&self, window: &FeedWindow) -> Result<NeoFeed, FeedError> {
        log::debug!(
            "fetching feed window {} to {}",
            window.start_date,
            window.end_date
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("start_date", window.start_date.to_string()),
                ("end_date", window.end_date.to_string()),
                ("api_key", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Unavailable(status));
        }

        let feed: NeoFeed = response.json().await?;
        log::info!(
            "feed returned {} bodies for {} to {}",
            feed.entry_count(),
            window.start_date,
            window.end_date
        );
        Ok(feed)
    }
}
