use crate::error::ConfigError;
use crate::scrapers::types::ScraperConfig;

/// Load scraper configuration, reading `.env` first.
///
/// Unset variables keep the built-in defaults.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparsable value.
pub fn load_scraper_config() -> Result<ScraperConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_scraper_config(|key| std::env::var(key))
}

fn build_scraper_config<F>(lookup: F) -> Result<ScraperConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let mut config = ScraperConfig::default();

    if let Ok(url) = lookup("SCOUT_TARGET_URL") {
        config.target_url = url;
    }
    if let Ok(user_agent) = lookup("SCOUT_USER_AGENT") {
        config.user_agent = user_agent;
    }
    if let Ok(raw) = lookup("SCOUT_TIMEOUT_SECS") {
        config.timeout_secs = match raw.parse::<u64>() {
            Ok(0) => {
                return Err(ConfigError::InvalidEnvVar {
                    var: "SCOUT_TIMEOUT_SECS".to_string(),
                    reason: "must be greater than zero".to_string(),
                })
            }
            Ok(secs) => secs,
            Err(e) => {
                return Err(ConfigError::InvalidEnvVar {
                    var: "SCOUT_TIMEOUT_SECS".to_string(),
                    reason: e.to_string(),
                })
            }
        };
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrapers::types::{DEFAULT_TARGET_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
    use std::collections::HashMap;
    use std::env::VarError;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_yields_defaults() {
        let env = HashMap::new();
        let config = build_scraper_config(lookup_from_map(&env)).unwrap();

        assert_eq!(config.target_url, DEFAULT_TARGET_URL);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn env_overrides_defaults() {
        let mut env = HashMap::new();
        env.insert("SCOUT_TARGET_URL", "http://localhost:8080/list");
        env.insert("SCOUT_USER_AGENT", "scout-test/0.1");
        env.insert("SCOUT_TIMEOUT_SECS", "3");

        let config = build_scraper_config(lookup_from_map(&env)).unwrap();
        assert_eq!(config.target_url, "http://localhost:8080/list");
        assert_eq!(config.user_agent, "scout-test/0.1");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let mut env = HashMap::new();
        env.insert("SCOUT_TIMEOUT_SECS", "ten");

        let err = build_scraper_config(lookup_from_map(&env)).unwrap_err();
        assert!(err.to_string().contains("SCOUT_TIMEOUT_SECS"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut env = HashMap::new();
        env.insert("SCOUT_TIMEOUT_SECS", "0");

        assert!(build_scraper_config(lookup_from_map(&env)).is_err());
    }
}
