//! Static user-facing messages written into the error slot.

/// Shown when the posts collection cannot be fetched.
pub const POSTS_LOAD_FAILED: &str = "Could not load posts. Please try again later!";

/// Shown when one or more audio samples cannot be fetched or decoded.
pub const SAMPLES_LOAD_FAILED: &str = "Could not load audio samples. Please try again later!";
