//! Audio card controller
//!
//! Loads the catalog, renders one card per sample and runs the per-sample
//! `Stopped`/`Playing` state machine.
//!
//! Natural end of playback arrives as a [`CardEvent`] on a channel the host
//! drains with [`AudioCardController::next_event`] and feeds back through
//! [`AudioCardController::handle_event`]. Each play gets a cycle number that
//! is unique for the controller's lifetime, so an event from a handle that
//! was stopped, replaced or belongs to an earlier load is ignored.

use crate::card::{AudioCardRenderer, PlaybackGlyph};
use crate::decoder::SampleDecoder;
use crate::error::{PlaybackError, Result};
use crate::fetch::SampleFetcher;
use crate::loader::{LoadPolicy, LoadReport, LoadedSample, SampleLoader};
use crate::playback::{PlaybackBackend, PlaybackHandle};
use sampleboard_core::{messages, AudioSampleDescriptor, DecodedBuffer};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

/// Playback state of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    /// Initial state; the button shows the play glyph
    #[default]
    Stopped,

    /// A handle is running; the button shows the pause glyph
    Playing,
}

/// Notifications delivered to the controller from running playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// The handle started in `cycle` played its buffer to the end
    PlaybackFinished { index: usize, cycle: u64 },
}

/// Per-sample runtime state
pub struct AudioSampleState {
    name: String,
    buffer: Arc<DecodedBuffer>,
    handle: Option<Box<dyn PlaybackHandle>>,
    state: CardState,
    cycle: u64,
}

impl AudioSampleState {
    fn new(sample: LoadedSample) -> Self {
        Self {
            name: sample.name,
            buffer: sample.buffer,
            handle: None,
            state: CardState::Stopped,
            cycle: 0,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decoded audio
    pub fn buffer(&self) -> &Arc<DecodedBuffer> {
        &self.buffer
    }

    /// Current playback state
    pub fn state(&self) -> CardState {
        self.state
    }

    /// Whether the sample is playing
    pub fn is_playing(&self) -> bool {
        self.state == CardState::Playing
    }

    /// Cycle number of the latest play, 0 if never played
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}

/// Controller for the audio cards widget.
pub struct AudioCardController<R> {
    catalog: Vec<AudioSampleDescriptor>,
    loader: SampleLoader,
    backend: Arc<dyn PlaybackBackend>,
    policy: LoadPolicy,
    renderer: R,
    samples: Vec<AudioSampleState>,
    last_cycle: u64,
    events_tx: UnboundedSender<CardEvent>,
    events_rx: UnboundedReceiver<CardEvent>,
}

impl<R: AudioCardRenderer> AudioCardController<R> {
    /// Create a controller for `catalog` using the all-or-nothing load policy.
    pub fn new(
        catalog: Vec<AudioSampleDescriptor>,
        fetcher: Arc<dyn SampleFetcher>,
        decoder: Arc<dyn SampleDecoder>,
        backend: Arc<dyn PlaybackBackend>,
        renderer: R,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            loader: SampleLoader::new(fetcher, decoder),
            backend,
            policy: LoadPolicy::default(),
            renderer,
            samples: Vec::new(),
            last_cycle: 0,
            events_tx,
            events_rx,
        }
    }

    /// Choose how partial load failures are handled.
    #[must_use]
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fetch and decode every sample, then render the cards.
    ///
    /// Failures are logged and turned into the static error message; they
    /// never propagate. Returns the number of cards rendered.
    pub async fn load(&mut self) -> usize {
        info!(
            samples = self.catalog.len(),
            policy = %self.policy,
            "Loading audio samples"
        );
        let LoadReport { loaded, failures } =
            self.loader.load_all(&self.catalog, self.policy).await;

        for failure in &failures {
            error!(sample = %failure.name, error = %failure.source, "Failed to load audio sample");
        }
        if !failures.is_empty() {
            self.renderer.show_error(messages::SAMPLES_LOAD_FAILED);
        }

        self.stop_all();
        // Completions queued for the previous cards must not reach the new ones
        while self.events_rx.try_recv().is_ok() {}
        self.samples = loaded.into_iter().map(AudioSampleState::new).collect();
        self.render();

        info!(
            rendered = self.samples.len(),
            failed = failures.len(),
            "Audio samples loaded"
        );
        self.samples.len()
    }

    /// Redraw one card per loaded sample, all showing the play glyph.
    pub fn render(&mut self) {
        self.renderer.clear_cards();
        for (index, sample) in self.samples.iter().enumerate() {
            self.renderer.append_card(index, &sample.name);
            if sample.is_playing() {
                self.renderer.set_glyph(index, PlaybackGlyph::Pause);
            }
        }
    }

    /// Play a stopped sample from the start, or stop a playing one.
    ///
    /// Returns the state the card is in afterwards.
    pub fn toggle_playback(&mut self, index: usize) -> Result<CardState> {
        let sample = self
            .samples
            .get_mut(index)
            .ok_or(PlaybackError::InvalidCard(index))?;

        match sample.state {
            CardState::Playing => {
                if let Some(mut handle) = sample.handle.take() {
                    handle.stop();
                }
                sample.state = CardState::Stopped;
                self.renderer.set_glyph(index, PlaybackGlyph::Play);
                debug!(index, cycle = sample.cycle, "Playback stopped");
            }
            CardState::Stopped => {
                let runtime = tokio::runtime::Handle::try_current()
                    .map_err(|e| PlaybackError::Stream(e.to_string()))?;
                let mut handle = self.backend.create_handle(Arc::clone(&sample.buffer))?;
                let completion = handle.start(Duration::ZERO)?;

                self.last_cycle += 1;
                let cycle = self.last_cycle;
                sample.cycle = cycle;
                let events = self.events_tx.clone();
                runtime.spawn(async move {
                    if completion.finished().await {
                        // Controller dropped means nobody cares any more
                        let _ = events.send(CardEvent::PlaybackFinished { index, cycle });
                    }
                });

                sample.handle = Some(handle);
                sample.state = CardState::Playing;
                self.renderer.set_glyph(index, PlaybackGlyph::Pause);
                debug!(index, cycle, "Playback started");
            }
        }

        Ok(sample.state)
    }

    /// Apply a playback notification. Returns `true` if it changed a card.
    pub fn handle_event(&mut self, event: CardEvent) -> bool {
        match event {
            CardEvent::PlaybackFinished { index, cycle } => {
                let Some(sample) = self.samples.get_mut(index) else {
                    return false;
                };
                if sample.cycle != cycle || sample.state != CardState::Playing {
                    debug!(index, cycle, current = sample.cycle, "Ignoring stale completion");
                    return false;
                }

                sample.handle = None;
                sample.state = CardState::Stopped;
                self.renderer.set_glyph(index, PlaybackGlyph::Play);
                debug!(index, cycle, "Playback finished");
                true
            }
        }
    }

    /// Wait for the next playback notification.
    pub async fn next_event(&mut self) -> Option<CardEvent> {
        self.events_rx.recv().await
    }

    /// Take a pending notification without waiting.
    pub fn try_next_event(&mut self) -> Option<CardEvent> {
        self.events_rx.try_recv().ok()
    }

    /// Stop every playing sample.
    pub fn stop_all(&mut self) {
        for (index, sample) in self.samples.iter_mut().enumerate() {
            if let Some(mut handle) = sample.handle.take() {
                handle.stop();
                sample.state = CardState::Stopped;
                self.renderer.set_glyph(index, PlaybackGlyph::Play);
            }
        }
    }

    /// Loaded samples in card order
    pub fn samples(&self) -> &[AudioSampleState] {
        &self.samples
    }

    /// State of one card
    pub fn card_state(&self, index: usize) -> Option<CardState> {
        self.samples.get(index).map(AudioSampleState::state)
    }

    /// Active load policy
    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Borrow the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutably borrow the renderer
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
