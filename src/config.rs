use anyhow::{Context, Result};
use reqwest::Url;
use std::env;

pub const DEFAULT_STATS_URL: &str = "https://api.covid19india.org/data.json";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_token: String,
    /// Public base URL for webhook delivery. Long polling is used when unset.
    pub webhook_url: Option<Url>,
    pub port: u16,
    pub stats_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| var(key).filter(|value| !value.is_empty());

        let telegram_token = non_empty("TELEGRAM_BOT_TOKEN")
            .or_else(|| non_empty("TOKEN"))
            .context("TELEGRAM_BOT_TOKEN environment variable is required")?;

        let webhook_url = match non_empty("WEBHOOK_URL") {
            Some(url) => Some(
                Url::parse(&url).with_context(|| format!("WEBHOOK_URL is not a valid URL: {}", url))?,
            ),
            None => None,
        };

        let port = match var("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT must be a port number, got {:?}", port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            telegram_token,
            webhook_url,
            port,
            stats_url: var("STATS_API_URL").unwrap_or_else(|| DEFAULT_STATS_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let config = config_from(&[("TELEGRAM_BOT_TOKEN", "123:abc")]).unwrap();
        assert_eq!(config.telegram_token, "123:abc");
        assert!(config.webhook_url.is_none());
        assert_eq!(config.port, 8080);
        assert_eq!(config.stats_url, DEFAULT_STATS_URL);
    }

    #[test]
    fn legacy_token_variable_is_accepted() {
        let config = config_from(&[("TOKEN", "legacy")]).unwrap();
        assert_eq!(config.telegram_token, "legacy");
    }

    #[test]
    fn empty_token_falls_back_to_legacy_variable() {
        let config = config_from(&[("TELEGRAM_BOT_TOKEN", ""), ("TOKEN", "legacy")]).unwrap();
        assert_eq!(config.telegram_token, "legacy");

        assert!(config_from(&[("TELEGRAM_BOT_TOKEN", ""), ("TOKEN", "")]).is_err());
    }

    #[test]
    fn missing_token_is_an_error() {
        let err = config_from(&[("PORT", "443")]).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    fn webhook_settings_are_parsed() {
        let config = config_from(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("WEBHOOK_URL", "https://covidindia-bot.herokuapp.com"),
            ("PORT", "5000"),
            ("STATS_API_URL", "http://localhost:9000/data.json"),
        ])
        .unwrap();
        assert_eq!(
            config.webhook_url.unwrap().as_str(),
            "https://covidindia-bot.herokuapp.com/"
        );
        assert_eq!(config.port, 5000);
        assert_eq!(config.stats_url, "http://localhost:9000/data.json");
    }

    #[test]
    fn bad_port_is_rejected() {
        assert!(config_from(&[("TELEGRAM_BOT_TOKEN", "t"), ("PORT", "http")]).is_err());
    }

    #[test]
    fn bad_webhook_url_is_rejected() {
        assert!(config_from(&[("TELEGRAM_BOT_TOKEN", "t"), ("WEBHOOK_URL", "not a url")]).is_err());
    }
}
