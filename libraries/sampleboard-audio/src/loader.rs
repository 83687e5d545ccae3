//! Concurrent fetch + decode of the sample catalog

use crate::decoder::SampleDecoder;
use crate::error::{SampleError, SampleLoadError};
use crate::fetch::SampleFetcher;
use futures_util::future::join_all;
use sampleboard_core::{AudioSampleDescriptor, DecodeError, DecodedBuffer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// What to do when some samples fail to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPolicy {
    /// One failure blanks the whole widget
    #[default]
    AllOrNothing,

    /// Show every sample that loaded
    PartialSuccess,
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPolicy::AllOrNothing => f.write_str("all_or_nothing"),
            LoadPolicy::PartialSuccess => f.write_str("partial_success"),
        }
    }
}

impl FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "all_or_nothing" => Ok(LoadPolicy::AllOrNothing),
            "partial_success" => Ok(LoadPolicy::PartialSuccess),
            other => Err(format!("unknown load policy: {}", other)),
        }
    }
}

/// A sample ready to play
#[derive(Debug, Clone)]
pub struct LoadedSample {
    /// Descriptor name
    pub name: String,

    /// Decoded audio, shared with playback handles
    pub buffer: Arc<DecodedBuffer>,
}

/// Outcome of loading a whole catalog
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Samples to render, in catalog order
    pub loaded: Vec<LoadedSample>,

    /// Every sample that failed, in catalog order
    pub failures: Vec<SampleLoadError>,
}

impl LoadReport {
    /// Whether any sample failed
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Fetches and decodes descriptors.
#[derive(Clone)]
pub struct SampleLoader {
    fetcher: Arc<dyn SampleFetcher>,
    decoder: Arc<dyn SampleDecoder>,
}

impl SampleLoader {
    /// Create a loader from its two collaborators.
    pub fn new(fetcher: Arc<dyn SampleFetcher>, decoder: Arc<dyn SampleDecoder>) -> Self {
        Self { fetcher, decoder }
    }

    /// Fetch and decode one sample. Decoding runs on the blocking pool.
    pub async fn load_one(
        &self,
        descriptor: &AudioSampleDescriptor,
    ) -> Result<LoadedSample, SampleLoadError> {
        let fail = |source: SampleError| SampleLoadError {
            name: descriptor.name.clone(),
            source,
        };

        let bytes = self
            .fetcher
            .fetch(descriptor)
            .await
            .map_err(|e| fail(e.into()))?;

        let decoder = Arc::clone(&self.decoder);
        let extension = descriptor.extension();
        let buffer = tokio::task::spawn_blocking(move || decoder.decode(bytes, extension.as_deref()))
            .await
            .map_err(|e| fail(DecodeError::Codec(format!("Decoder task failed: {}", e)).into()))?
            .map_err(|e| fail(e.into()))?;

        debug!(name = %descriptor.name, duration = ?buffer.duration(), "Sample ready");
        Ok(LoadedSample {
            name: descriptor.name.clone(),
            buffer: Arc::new(buffer),
        })
    }

    /// Load every descriptor concurrently and wait for all of them to settle.
    ///
    /// Under `AllOrNothing` a single failure empties `loaded`.
    pub async fn load_all(
        &self,
        catalog: &[AudioSampleDescriptor],
        policy: LoadPolicy,
    ) -> LoadReport {
        let results = join_all(catalog.iter().map(|d| self.load_one(d))).await;

        let mut report = LoadReport::default();
        for result in results {
            match result {
                Ok(sample) => report.loaded.push(sample),
                Err(e) => report.failures.push(e),
            }
        }

        if policy == LoadPolicy::AllOrNothing && report.has_failures() {
            report.loaded.clear();
        }
        report
    }
}
