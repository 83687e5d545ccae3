//! Raw sample download

use async_trait::async_trait;
use reqwest::Client;
use sampleboard_core::http::{self, HttpSettings};
use sampleboard_core::{AudioSampleDescriptor, Result};
use tracing::debug;

/// Supplier of encoded sample bytes.
#[async_trait]
pub trait SampleFetcher: Send + Sync {
    /// Download the encoded bytes behind `descriptor`.
    async fn fetch(&self, descriptor: &AudioSampleDescriptor) -> Result<Vec<u8>>;
}

/// Fetcher that downloads each endpoint with a plain `GET`.
pub struct HttpSampleFetcher {
    http: Client,
}

impl HttpSampleFetcher {
    /// Create a fetcher with the given timeouts.
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        Ok(Self {
            http: settings.build_client()?,
        })
    }
}

#[async_trait]
impl SampleFetcher for HttpSampleFetcher {
    async fn fetch(&self, descriptor: &AudioSampleDescriptor) -> Result<Vec<u8>> {
        let url = http::parse_endpoint(&descriptor.endpoint)?;
        debug!(name = %descriptor.name, url = %url, "Fetching sample");

        let response = http::get_checked(&self.http, &url).await?;
        let bytes = response.bytes().await?;

        debug!(name = %descriptor.name, bytes = bytes.len(), "Fetched sample");
        Ok(bytes.to_vec())
    }
}
