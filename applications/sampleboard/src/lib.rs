//! SampleBoard
//!
//! Terminal host for the two widgets: the posts accordion and the audio
//! sample cards.
//!
//! This library exposes the host's building blocks for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod terminal;

// Re-export commonly used types for convenience
pub use commands::Command;
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use terminal::{Notice, TerminalCardRenderer, TerminalPostsRenderer};
