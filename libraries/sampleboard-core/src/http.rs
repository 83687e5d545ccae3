//! Shared HTTP plumbing for the posts source and the sample fetcher.

use crate::error::{FetchError, Result};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Timeouts applied to every outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Overall request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl HttpSettings {
    /// Build a `reqwest` client carrying these timeouts.
    pub fn build_client(&self) -> Result<Client> {
        let client = Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .user_agent(format!("SampleBoard/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }
}

/// Parse `endpoint` and require an http or https scheme.
pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    if endpoint.trim().is_empty() {
        return Err(FetchError::invalid_url("URL cannot be empty"));
    }

    let url = Url::parse(endpoint)
        .map_err(|e| FetchError::invalid_url(format!("{}: {}", endpoint, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::invalid_url(format!(
            "URL must start with http:// or https:// (got {}://)",
            other
        ))),
    }
}

/// Issue a GET and fail on anything but a 2xx status.
pub async fn get_checked(client: &Client, url: &Url) -> Result<Response> {
    debug!(url = %url, "Sending GET request");

    let response = client.get(url.clone()).send().await.map_err(|e| {
        if e.is_connect() || e.is_timeout() {
            FetchError::Unreachable(e.to_string())
        } else {
            FetchError::Request(e)
        }
    })?;

    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}
