//! Relay client: the single point of network I/O for the contact form.
//!
//! Submissions go to the web3forms relay, which forwards them by email.
//! One attempt per submit: no retries, no timeout, no idempotency key.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::contact::FormState;

/// Public relay endpoint used unless the configuration points elsewhere.
pub const RELAY_API_URL: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    // Omitted rather than sent as null when unset; the relay rejects it either way.
    #[serde(skip_serializing_if = "Option::is_none")]
    access_key: Option<&'a str>,
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

impl<'a> RelayPayload<'a> {
    fn new(access_key: Option<&'a str>, form: &'a FormState) -> Self {
        Self {
            access_key,
            name: &form.name,
            email: &form.email,
            message: &form.message,
        }
    }
}

/// What the relay said about a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    /// True only when the body carried `"success": true`.
    pub success: bool,
    /// Free-form explanation some relay responses include.
    pub message: Option<String>,
}

impl RelayResponse {
    /// Interprets any JSON body. Anything other than a boolean `success`
    /// field set to true counts as a rejection.
    pub fn from_value(value: &Value) -> Self {
        Self {
            success: value.get("success").and_then(Value::as_bool) == Some(true),
            message: value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Anything that can deliver a contact submission. `ContactForm` only talks
/// to this trait, so tests and alternative transports can be swapped in.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn submit(&self, form: &FormState) -> Result<RelayResponse, RelayError>;
}

/// HTTP client for the web3forms relay.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    endpoint: String,
    access_key: Option<String>,
}

impl RelayClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.relay_endpoint.clone(),
            access_key: config.access_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Relay for RelayClient {
    /// Posts the form as JSON and reads the reply body as JSON whatever the
    /// status code is; the `success` flag alone decides the outcome.
    async fn submit(&self, form: &FormState) -> Result<RelayResponse, RelayError> {
        if self.access_key.is_none() {
            warn!("No relay access key configured; the relay will reject this submission");
        }

        let payload = RelayPayload::new(self.access_key.as_deref(), form);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;
        let relay_response = RelayResponse::from_value(&value);

        debug!(
            "Relay responded: status={}, success={}",
            status, relay_response.success
        );

        Ok(relay_response)
    }
}
