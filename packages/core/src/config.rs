use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Locale used for number formatting in product cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fa,
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "fa" | "fa-ir" => Ok(Locale::Fa),
            other => bail!("unsupported locale '{other}' (expected 'en' or 'fa')"),
        }
    }
}

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub locale: Locale,
    /// Toast lifetime; only the web stack shows toasts, so it is not read from the environment
    pub notification_ttl: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            locale: Locale::En,
            notification_ttl: Duration::from_millis(4000),
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        Ok(Self {
            api_base_url: env::var("STOREFRONT_API_URL").unwrap_or(defaults.api_base_url),
            locale: match env::var("STOREFRONT_LOCALE") {
                Ok(raw) => raw.parse().context("STOREFRONT_LOCALE is invalid")?,
                Err(_) => defaults.locale,
            },
            notification_ttl: defaults.notification_ttl,
            request_timeout: match env::var("STOREFRONT_REQUEST_TIMEOUT_SECS") {
                Ok(raw) => Duration::from_secs(
                    raw.parse()
                        .context("STOREFRONT_REQUEST_TIMEOUT_SECS must be a valid number")?,
                ),
                Err(_) => defaults.request_timeout,
            },
        })
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("FA-IR".parse::<Locale>().unwrap(), Locale::Fa);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.notification_ttl, Duration::from_secs(4));
    }

    #[test]
    fn test_with_api_url_overrides() {
        let config = ClientConfig::default().with_api_url("https://shop.example.com");
        assert_eq!(config.api_base_url, "https://shop.example.com");
    }
}
