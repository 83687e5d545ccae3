//! Platform-agnostic playback traits
//!
//! A [`PlaybackBackend`] hands out single-shot [`PlaybackHandle`]s bound to a
//! decoded buffer. Starting a handle returns a [`Completion`] that resolves
//! once the buffer has been played to the end; stopping a handle resolves it
//! as "not finished" instead, so a completion never fires after a manual stop.

use crate::error::{PlaybackError, Result};
use sampleboard_core::DecodedBuffer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::debug;

/// Resolves when a started handle has played its buffer to the end.
#[derive(Debug)]
pub struct Completion {
    rx: oneshot::Receiver<()>,
}

/// Producer side of a [`Completion`], held by the playback implementation.
#[derive(Debug)]
pub struct CompletionNotifier {
    tx: oneshot::Sender<()>,
}

impl Completion {
    /// Create a connected notifier/completion pair.
    pub fn pair() -> (CompletionNotifier, Completion) {
        let (tx, rx) = oneshot::channel();
        (CompletionNotifier { tx }, Completion { rx })
    }

    /// Wait for the end of playback.
    ///
    /// Returns `true` if the buffer was exhausted, `false` if the handle was
    /// stopped or dropped first.
    pub async fn finished(self) -> bool {
        self.rx.await.is_ok()
    }
}

impl CompletionNotifier {
    /// Report natural end of playback.
    pub fn notify(self) {
        // Receiver may already be gone if nobody is listening
        let _ = self.tx.send(());
    }
}

/// One play of one buffer.
pub trait PlaybackHandle: Send {
    /// Start playback at `offset` into the buffer.
    ///
    /// A handle can be started once; later calls fail with `HandleSpent`.
    fn start(&mut self, offset: Duration) -> Result<Completion>;

    /// Stop immediately. The completion resolves as not finished.
    fn stop(&mut self);
}

/// Factory for playback handles.
pub trait PlaybackBackend: Send + Sync {
    /// Create a fresh handle bound to `buffer`.
    fn create_handle(&self, buffer: Arc<DecodedBuffer>) -> Result<Box<dyn PlaybackHandle>>;
}

/// Backend that produces no sound and finishes after the buffer's duration.
///
/// Used by headless hosts and tests. Requires a running Tokio runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimulatedBackend;

impl PlaybackBackend for SimulatedBackend {
    fn create_handle(&self, buffer: Arc<DecodedBuffer>) -> Result<Box<dyn PlaybackHandle>> {
        Ok(Box::new(SimulatedHandle {
            buffer,
            task: None,
            spent: false,
        }))
    }
}

struct SimulatedHandle {
    buffer: Arc<DecodedBuffer>,
    task: Option<JoinHandle<()>>,
    spent: bool,
}

impl PlaybackHandle for SimulatedHandle {
    fn start(&mut self, offset: Duration) -> Result<Completion> {
        if self.spent {
            return Err(PlaybackError::HandleSpent);
        }
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| PlaybackError::Stream(e.to_string()))?;

        let remaining = self.buffer.duration().saturating_sub(offset);
        let (notifier, completion) = Completion::pair();
        debug!(?remaining, "Simulated playback started");

        self.task = Some(runtime.spawn(async move {
            tokio::time::sleep(remaining).await;
            notifier.notify();
        }));
        self.spent = true;
        Ok(completion)
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for SimulatedHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
