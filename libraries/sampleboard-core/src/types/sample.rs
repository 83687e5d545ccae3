/// Audio sample catalog entries
use serde::{Deserialize, Serialize};
use url::Url;

/// Static description of one audio sample: a display name and where to fetch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSampleDescriptor {
    /// Display name shown on the card
    pub name: String,

    /// HTTP(S) URL serving the encoded audio
    pub endpoint: String,
}

impl AudioSampleDescriptor {
    /// Create a new descriptor
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
        }
    }

    /// File extension of the endpoint's last path segment, used as a decoder hint
    pub fn extension(&self) -> Option<String> {
        let url = Url::parse(&self.endpoint).ok()?;
        let file = url.path_segments()?.next_back()?;
        let (stem, ext) = file.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            None
        } else {
            Some(ext.to_string())
        }
    }
}
