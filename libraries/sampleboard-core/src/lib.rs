//! SampleBoard Core
//!
//! Platform-agnostic types, errors and render capabilities shared by the
//! SampleBoard widgets.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Post`, `AudioSampleDescriptor`, `DecodedBuffer`
//! - **Errors**: `FetchError` and `DecodeError`, the only two failure kinds
//!   the widgets surface
//! - **Render capability**: the `ErrorSlot` shared by every renderer
//! - **HTTP plumbing**: `HttpSettings` and a status-checked GET helper used
//!   by the posts source and the sample fetcher
//!
//! # Example
//!
//! ```rust
//! use sampleboard_core::{ErrorSlot, messages};
//!
//! struct Banner(Option<String>);
//!
//! impl ErrorSlot for Banner {
//!     fn show_error(&mut self, message: &str) {
//!         self.0 = Some(message.to_string());
//!     }
//! }
//!
//! let mut banner = Banner(None);
//! banner.show_error(messages::POSTS_LOAD_FAILED);
//! assert!(banner.0.is_some());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod http;
pub mod messages;
pub mod surface;
pub mod types;

pub use error::{DecodeError, FetchError, Result};
pub use http::HttpSettings;
pub use surface::ErrorSlot;
pub use types::{AudioSampleDescriptor, DecodedBuffer, Post, SampleRate, UserId};
