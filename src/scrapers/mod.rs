pub mod dom;
pub mod extract;
pub mod fetch;
pub mod timeout;
pub mod traits;
pub mod types;

pub use extract::extract_restaurants;
pub use fetch::HttpFetcher;
pub use timeout::TimeoutScraper;
pub use traits::{PageFetcher, ScraperTrait};
pub use types::{ScraperConfig, SiteAdapter};
