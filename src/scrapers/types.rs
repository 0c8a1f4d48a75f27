use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_URL: &str =
    "https://www.timeout.com/mumbai/restaurants/best-restaurants-in-mumbai";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where and how to fetch the listings page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Page holding the restaurant tiles
    pub target_url: String,
    /// Browser identity sent as `User-Agent`
    pub user_agent: String,
    /// Upper bound on the whole request, in seconds
    pub timeout_secs: u64,
    /// Markup literals for the target site
    pub adapter: SiteAdapter,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            adapter: SiteAdapter::default(),
        }
    }
}

/// Every selector and literal tied to the target page's markup.
///
/// When the site changes its HTML, this is the only thing that should need
/// touching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteAdapter {
    /// Container the tiles must live in. `None` searches the whole page.
    pub zone_selector: Option<String>,
    /// One match per restaurant tile
    pub listing_selector: String,
    pub heading_selector: String,
    pub image_selector: String,
    pub image_attribute: String,
    /// Block holding the description and price spans
    pub summary_selector: String,
    pub span_selector: String,
    /// Bold label searched when the spans carry no price
    pub bold_selector: String,
    pub price_prefix: String,
    pub description_placeholder: String,
    pub missing_listings_message: String,
}

impl Default for SiteAdapter {
    fn default() -> Self {
        Self {
            zone_selector: None,
            listing_selector: "article.tile".to_string(),
            heading_selector: "h1, h2, h3, h4, h5, h6".to_string(),
            image_selector: "img".to_string(),
            image_attribute: "src".to_string(),
            summary_selector: r#"[data-testid="summary_testID"]"#.to_string(),
            span_selector: "span".to_string(),
            bold_selector: "strong, b".to_string(),
            price_prefix: "Price:".to_string(),
            description_placeholder: "No description available.".to_string(),
            missing_listings_message: "Could not find restaurant listings: the page structure may have changed or the content is rendered by JavaScript".to_string(),
        }
    }
}
