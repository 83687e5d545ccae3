//! Render boundary for the audio cards

use sampleboard_core::ErrorSlot;
use serde::{Deserialize, Serialize};

/// Icon shown on a card's toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackGlyph {
    /// Sample is stopped; pressing plays it
    Play,

    /// Sample is playing; pressing stops it
    Pause,
}

impl PlaybackGlyph {
    /// Material Symbols icon name
    pub fn icon(&self) -> &'static str {
        match self {
            PlaybackGlyph::Play => "play_arrow",
            PlaybackGlyph::Pause => "pause",
        }
    }
}

/// Surface the audio controller draws on.
pub trait AudioCardRenderer: ErrorSlot {
    /// Remove every card from the container.
    fn clear_cards(&mut self);

    /// Append a card with a title and a toggle button showing the play glyph.
    ///
    /// Activating the button must call back into
    /// `AudioCardController::toggle_playback(index)`.
    fn append_card(&mut self, index: usize, name: &str);

    /// Update a card's toggle button.
    fn set_glyph(&mut self, index: usize, glyph: PlaybackGlyph);
}
