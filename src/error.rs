use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure or non-2xx status while fetching the page.
    #[error("Request error: {0}")]
    Network(String),

    /// No listing nodes matched; markup drifted or needs JavaScript.
    #[error("{0}")]
    Structural(String),

    #[error("Scraping error: {0}")]
    Unexpected(String),

    #[error("Scraping error: invalid selector \"{selector}\": {reason}")]
    InvalidSelector { selector: String, reason: String },
}

impl From<reqwest::Error> for ScrapeError {
    fn from(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
