use crate::error::ScrapeError;
use crate::models::ScrapeResult;
use async_trait::async_trait;

/// Common trait for all listing scrapers
#[async_trait]
pub trait ScraperTrait: Send + Sync {
    /// Run the whole pipeline. Failures are reported inside the envelope.
    async fn scrape(&self) -> ScrapeResult;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}

/// Source of raw page bytes; swapped for a fixture in tests
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}
