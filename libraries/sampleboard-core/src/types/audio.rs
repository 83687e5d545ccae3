/// Decoded audio types
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleRate(pub u32);

impl SampleRate {
    /// Common sample rates
    pub const CD_QUALITY: Self = Self(44_100);
    pub const DVD_QUALITY: Self = Self(48_000);

    /// Create a new sample rate
    #[must_use]
    pub fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }
}

/// A fully decoded, playable sample
///
/// Samples are stored as f32 in the range [-1.0, 1.0]
/// Interleaved format: [L, R, L, R, ...] for stereo
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBuffer {
    /// Audio samples (f32, interleaved)
    pub samples: Vec<f32>,

    /// Sample rate of the decoded stream
    pub sample_rate: SampleRate,

    /// Number of interleaved channels
    pub channels: u16,
}

impl DecodedBuffer {
    /// Create a new decoded buffer
    pub fn new(samples: Vec<f32>, sample_rate: SampleRate, channels: u16) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
        }
    }

    /// Get the number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / self.channels as usize
    }

    /// Playback length at the native sample rate
    pub fn duration(&self) -> Duration {
        if self.sample_rate.as_hz() == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate.as_hz() as f64)
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
