use crate::error::ScrapeError;
use crate::models::ScrapeResult;
use crate::scrapers::dom::parse_document;
use crate::scrapers::extract::extract_restaurants;
use crate::scrapers::fetch::HttpFetcher;
use crate::scrapers::traits::{PageFetcher, ScraperTrait};
use crate::scrapers::types::ScraperConfig;
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Time Out "best restaurants" list scraper
pub struct TimeoutScraper<F = HttpFetcher> {
    fetcher: F,
    config: ScraperConfig,
}

impl TimeoutScraper<HttpFetcher> {
    /// Create a scraper against the live Time Out Mumbai page
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_config(ScraperConfig::default())
    }

    /// Create a scraper with a custom target, user agent, timeout or adapter
    pub fn with_config(config: ScraperConfig) -> Result<Self, ScrapeError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }
}

impl<F: PageFetcher> TimeoutScraper<F> {
    /// Use a custom page source, e.g. a fixture in tests
    pub fn with_fetcher(fetcher: F, config: ScraperConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Fetch, parse, locate, extract. Any failure short-circuits.
    async fn run(&self) -> Result<ScrapeResult, ScrapeError> {
        let raw = self.fetcher.fetch(&self.config.target_url).await?;
        let document = parse_document(&raw);

        let restaurants = extract_restaurants(&document, &self.config.adapter)?;
        Ok(ScrapeResult::success(restaurants))
    }
}

#[async_trait]
impl<F: PageFetcher> ScraperTrait for TimeoutScraper<F> {
    async fn scrape(&self) -> ScrapeResult {
        info!("Starting restaurant scrape from {}", self.config.target_url);

        match self.run().await {
            Ok(result) => {
                info!("Scraped {} restaurants", result.restaurants().len());
                result
            }
            Err(err @ ScrapeError::Structural(_)) => {
                warn!("No restaurant listings found - page structure may have changed");
                debug!("{}", err);
                ScrapeResult::failure(&err)
            }
            Err(err) => {
                warn!("Scrape failed: {}", err);
                ScrapeResult::failure(&err)
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "Time Out"
    }
}
