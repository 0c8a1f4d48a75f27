use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ScrapeError;

/// Canonical price tier of a restaurant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PriceLabel {
    Average,
    Pricey,
    Bargain,
    Unavailable,
}

impl PriceLabel {
    /// Map raw price text onto the closed label vocabulary.
    ///
    /// Anything outside `average`/`pricey`/`bargain` (case-insensitive),
    /// including the empty string, becomes `Unavailable`.
    pub fn normalize(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "average" => Self::Average,
            "pricey" => Self::Pricey,
            "bargain" => Self::Bargain,
            _ => Self::Unavailable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Average => "Average",
            Self::Pricey => "Pricey",
            Self::Bargain => "Bargain",
            Self::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One restaurant pulled from a listing tile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RestaurantRecord {
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub price: PriceLabel,
}

/// Envelope returned by every scrape, successful or not.
///
/// Fields are private so the only way to build one is through
/// [`ScrapeResult::success`] or [`ScrapeResult::failure`]: a failed result
/// never carries restaurants and a successful one never carries an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrapeResult {
    success: bool,
    restaurants: Vec<RestaurantRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ScrapeResult {
    pub fn success(restaurants: Vec<RestaurantRecord>) -> Self {
        Self {
            success: true,
            restaurants,
            error: None,
        }
    }

    pub fn failure(error: &ScrapeError) -> Self {
        Self {
            success: false,
            restaurants: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn restaurants(&self) -> &[RestaurantRecord] {
        &self.restaurants
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl From<ScrapeError> for ScrapeResult {
    fn from(error: ScrapeError) -> Self {
        Self::failure(&error)
    }
}
