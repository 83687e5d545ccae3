/// Audio-specific errors
use sampleboard_core::{DecodeError, FetchError};
use thiserror::Error;

/// Result type alias using `PlaybackError`
pub type Result<T> = std::result::Result<T, PlaybackError>;

/// Why one sample could not be loaded
#[derive(Error, Debug)]
pub enum SampleError {
    /// Raw bytes could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Bytes were fetched but could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// A failed sample, named for diagnostics
#[derive(Error, Debug)]
#[error("{name}: {source}")]
pub struct SampleLoadError {
    /// Descriptor name of the failed sample
    pub name: String,

    /// Underlying failure
    #[source]
    pub source: SampleError,
}

/// Playback errors
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// No card at this index
    #[error("No audio card at index {0}")]
    InvalidCard(usize),

    /// No output device available
    #[error("Audio device not found")]
    DeviceNotFound,

    /// Output stream could not be created or started
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// Sample could not be converted to the device rate
    #[error("Resampling failed: {0}")]
    Resample(String),

    /// Handle was already started once
    #[error("Playback handle already used")]
    HandleSpent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_names_sample() {
        let err = SampleLoadError {
            name: "synth organ sample".to_string(),
            source: SampleError::Decode(DecodeError::NoAudioTrack),
        };
        let text = err.to_string();
        assert!(text.starts_with("synth organ sample"));
        assert!(text.contains("No audio tracks found"));
    }
}
