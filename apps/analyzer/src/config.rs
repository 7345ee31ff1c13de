use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::analysis::transport::DEFAULT_ANALYSIS_URL;
use crate::locale::Locale;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis_api_url: String,
    pub analysis_timeout: Duration,
    pub locale: Locale,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            analysis_api_url: std::env::var("ANALYSIS_API_URL")
                .unwrap_or_else(|_| DEFAULT_ANALYSIS_URL.to_string()),
            analysis_timeout: Duration::from_secs(
                optional_env("ANALYSIS_TIMEOUT_SECS", "120")
                    .parse::<u64>()
                    .context("ANALYSIS_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            locale: optional_env("UI_LOCALE", "pt-BR")
                .parse::<Locale>()
                .map_err(|e| anyhow!(e))
                .context("UI_LOCALE is invalid")?,
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
