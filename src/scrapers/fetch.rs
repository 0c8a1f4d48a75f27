use crate::error::ScrapeError;
use crate::scrapers::traits::PageFetcher;
use crate::scrapers::types::ScraperConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Single-shot GET with a browser user agent and a hard timeout. No retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ScrapeError::Unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        debug!("Fetching URL: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", url, response.status());
            return Err(ScrapeError::Network(format!(
                "{} returned HTTP status {}",
                url,
                response.status()
            )));
        }

        let body = response.bytes().await?;
        debug!("Downloaded {} bytes of HTML", body.len());

        Ok(body.to_vec())
    }
}
