pub mod config;
pub mod error;
pub mod models;
pub mod scrapers;

pub use error::{ConfigError, ScrapeError};
pub use models::{PriceLabel, RestaurantRecord, ScrapeResult};
pub use scrapers::{ScraperConfig, ScraperTrait, SiteAdapter, TimeoutScraper};
