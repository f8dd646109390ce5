use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::Config;
use crate::error::{LocatorError, Result};

/// Blocking HTTP client with the configured per-request deadline.
pub fn build_client(config: &Config) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| LocatorError::Config(format!("Unable to build HTTP client: {e}")))
}

/// Status and body of a finished request, read as text so error bodies can
/// still be inspected.
pub(crate) struct RawResponse {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

impl RawResponse {
    pub fn read(resp: reqwest::blocking::Response) -> Result<Self> {
        let status = resp.status();
        let body = resp.text()?;
        Ok(Self {
            status: status.as_u16(),
            ok: status.is_success(),
            body,
        })
    }
}
