//! SampleBoard Audio
//!
//! The audio sample player: fetch and decode a fixed catalog of samples,
//! then render one play/pause card per sample.
//!
//! This crate provides:
//! - Sample download over HTTP ([`HttpSampleFetcher`])
//! - In-memory decoding via Symphonia (MP3, FLAC, OGG/Vorbis, WAV)
//! - Single-shot playback handles with explicit completion notification
//! - The [`AudioCardController`] state machine and its render boundary
//! - Real output through CPAL behind the `desktop` feature
//!
//! # Example: Headless playback
//!
//! ```rust,no_run
//! use sampleboard_audio::{
//!     default_catalog, AudioCardController, AudioCardRenderer, HttpSampleFetcher,
//!     PlaybackGlyph, SimulatedBackend, SymphoniaDecoder,
//! };
//! use sampleboard_core::{ErrorSlot, HttpSettings};
//! use std::sync::Arc;
//!
//! struct Log;
//! impl ErrorSlot for Log {
//!     fn show_error(&mut self, message: &str) { eprintln!("{}", message); }
//! }
//! impl AudioCardRenderer for Log {
//!     fn clear_cards(&mut self) {}
//!     fn append_card(&mut self, index: usize, name: &str) { println!("[{}] {}", index, name); }
//!     fn set_glyph(&mut self, index: usize, glyph: PlaybackGlyph) { println!("[{}] {}", index, glyph.icon()); }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = Arc::new(HttpSampleFetcher::new(&HttpSettings::default())?);
//! let mut controller = AudioCardController::new(
//!     default_catalog(),
//!     fetcher,
//!     Arc::new(SymphoniaDecoder::new()),
//!     Arc::new(SimulatedBackend),
//!     Log,
//! );
//!
//! if controller.load().await > 0 {
//!     controller.toggle_playback(0)?;
//!     if let Some(event) = controller.next_event().await {
//!         controller.handle_event(event);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod card;
mod catalog;
mod controller;
mod decoder;
#[cfg(feature = "desktop")]
mod desktop;
mod error;
mod fetch;
mod loader;
mod playback;

pub use card::{AudioCardRenderer, PlaybackGlyph};
pub use catalog::{default_catalog, SAMPLE_BUCKET_URL};
pub use controller::{AudioCardController, AudioSampleState, CardEvent, CardState};
pub use decoder::{SampleDecoder, SymphoniaDecoder};
#[cfg(feature = "desktop")]
pub use desktop::CpalBackend;
pub use error::{PlaybackError, Result, SampleError, SampleLoadError};
pub use fetch::{HttpSampleFetcher, SampleFetcher};
pub use loader::{LoadPolicy, LoadReport, LoadedSample, SampleLoader};
pub use playback::{Completion, CompletionNotifier, PlaybackBackend, PlaybackHandle, SimulatedBackend};
