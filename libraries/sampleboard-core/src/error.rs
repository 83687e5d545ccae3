/// Core error types for SampleBoard
use thiserror::Error;

/// Result type alias using `FetchError`
pub type Result<T> = std::result::Result<T, FetchError>;

/// Network or API failure while acquiring remote data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Endpoint is not a usable HTTP(S) URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection could not be established or timed out
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body could not be parsed
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Create an invalid URL error
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Audio decoding failure.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Container format could not be recognised
    #[error("Failed to probe audio data: {0}")]
    Probe(String),

    /// Container holds no decodable audio track
    #[error("No audio tracks found")]
    NoAudioTrack,

    /// Codec could not be created or a packet failed to decode
    #[error("Codec error: {0}")]
    Codec(String),

    /// Decoding finished without producing any samples
    #[error("Decoded audio is empty")]
    Empty,
}
