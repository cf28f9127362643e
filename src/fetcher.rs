use crate::types::Result;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Seam between the aggregator and the network. Tests drive the pipeline
/// with an in-memory implementation instead of live feeds.
pub trait FetchFeed {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("blog-feed-aggregator/0.1")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }
}

impl FetchFeed for Fetcher {
    /// Blocking GET returning the raw response body. Network failures,
    /// timeouts, and non-2xx statuses all surface as errors for the caller
    /// to recover per-source.
    fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching feed: {}", url);

        let response = self.client.get(url).send()?.error_for_status()?;
        let body = response.text()?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
