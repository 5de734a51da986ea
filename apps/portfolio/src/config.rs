use anyhow::{Context, Result};
use reqwest::Url;

use crate::relay::RELAY_API_URL;

/// Contact relay configuration loaded from environment variables.
/// Nothing here is required: a missing access key is forwarded as-is and
/// the relay rejects the submission.
#[derive(Debug, Clone)]
pub struct Config {
    pub access_key: Option<String>,
    pub relay_endpoint: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let relay_endpoint =
            optional_env("CONTACT_RELAY_URL").unwrap_or_else(|| RELAY_API_URL.to_string());
        Url::parse(&relay_endpoint).with_context(|| {
            format!("CONTACT_RELAY_URL must be an absolute URL, got '{relay_endpoint}'")
        })?;

        Ok(Config {
            access_key: optional_env("CONTACT_ACCESS_KEY"),
            relay_endpoint,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Builds a config for the public relay without reading the environment.
    pub fn new(access_key: impl Into<String>) -> Self {
        Config {
            access_key: Some(access_key.into()),
            relay_endpoint: RELAY_API_URL.to_string(),
            rust_log: "info".to_string(),
        }
    }

    pub fn with_relay_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.relay_endpoint = endpoint.into();
        self
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
