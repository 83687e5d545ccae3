//! Desktop playback through CPAL
//!
//! Every handle owns a dedicated thread that owns the CPAL stream. The
//! stream's callback reports the end of the buffer back to that thread,
//! which then drops the stream and fires the completion.

use crate::error::{PlaybackError, Result};
use crate::playback::{Completion, CompletionNotifier, PlaybackBackend, PlaybackHandle};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::Stream;
use crossbeam_channel::{bounded, Receiver, Sender};
use sampleboard_core::{DecodedBuffer, SampleRate};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error};

/// Playback backend writing to the default output device.
#[derive(Debug, Default, Clone, Copy)]
pub struct CpalBackend;

impl CpalBackend {
    /// Check that an output device is available.
    pub fn probe() -> Result<Self> {
        cpal::default_host()
            .default_output_device()
            .ok_or(PlaybackError::DeviceNotFound)?;
        Ok(Self)
    }
}

impl PlaybackBackend for CpalBackend {
    fn create_handle(&self, buffer: Arc<DecodedBuffer>) -> Result<Box<dyn PlaybackHandle>> {
        Ok(Box::new(CpalHandle {
            buffer,
            control: None,
            thread: None,
            spent: false,
        }))
    }
}

/// Messages to a handle's audio thread
#[derive(Debug, Clone, Copy)]
enum Control {
    Stop,
    Finished,
}

struct CpalHandle {
    buffer: Arc<DecodedBuffer>,
    control: Option<Sender<Control>>,
    thread: Option<JoinHandle<()>>,
    spent: bool,
}

impl PlaybackHandle for CpalHandle {
    fn start(&mut self, offset: Duration) -> Result<Completion> {
        if self.spent {
            return Err(PlaybackError::HandleSpent);
        }
        self.spent = true;

        let (control_tx, control_rx) = bounded::<Control>(4);
        let (ready_tx, ready_rx) = bounded::<Result<()>>(1);
        let (notifier, completion) = Completion::pair();

        let buffer = Arc::clone(&self.buffer);
        let finished_tx = control_tx.clone();
        let thread = thread::spawn(move || {
            audio_thread_run(buffer, offset, control_rx, finished_tx, ready_tx, notifier);
        });

        ready_rx
            .recv()
            .map_err(|_| PlaybackError::Stream("audio thread exited".to_string()))??;

        self.control = Some(control_tx);
        self.thread = Some(thread);
        Ok(completion)
    }

    fn stop(&mut self) {
        if let Some(control) = self.control.take() {
            // Thread may already have finished on its own
            let _ = control.send(Control::Stop);
        }
    }
}

impl Drop for CpalHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Audio thread main loop
///
/// Owns the stream until a stop request or the end of the buffer.
fn audio_thread_run(
    buffer: Arc<DecodedBuffer>,
    offset: Duration,
    control_rx: Receiver<Control>,
    finished_tx: Sender<Control>,
    ready_tx: Sender<Result<()>>,
    notifier: CompletionNotifier,
) {
    let stream = match open_stream(buffer, offset, finished_tx) {
        Ok(stream) => {
            let _ = ready_tx.send(Ok(()));
            stream
        }
        Err(e) => {
            let _ = ready_tx.send(Err(e));
            return;
        }
    };

    match control_rx.recv() {
        Ok(Control::Finished) => {
            drop(stream);
            debug!("Buffer exhausted");
            notifier.notify();
        }
        Ok(Control::Stop) | Err(_) => {
            drop(stream);
            debug!("Playback stopped");
        }
    }
}

fn open_stream(
    buffer: Arc<DecodedBuffer>,
    offset: Duration,
    finished_tx: Sender<Control>,
) -> Result<Stream> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(PlaybackError::DeviceNotFound)?;

    let supported = device
        .default_output_config()
        .map_err(|e| PlaybackError::Stream(e.to_string()))?;
    let output_rate = supported.sample_rate();
    let config = supported.config();
    let output_channels = config.channels as usize;

    let buffer = if buffer.sample_rate.as_hz() == output_rate {
        buffer
    } else {
        Arc::new(resample_buffer(&buffer, output_rate)?)
    };
    let mut cursor = FrameCursor::new(buffer, offset);
    let mut finished_sent = false;

    let stream = device
        .build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                let exhausted = cursor.fill(data, output_channels);
                if exhausted && !finished_sent {
                    finished_sent = true;
                    let _ = finished_tx.try_send(Control::Finished);
                }
            },
            |err| error!(error = %err, "Audio stream error"),
            None,
        )
        .map_err(|e| PlaybackError::Stream(e.to_string()))?;

    stream
        .play()
        .map_err(|e| PlaybackError::Stream(e.to_string()))?;
    Ok(stream)
}

/// Convert `buffer` to `target_rate` with a windowed sinc resampler.
fn resample_buffer(buffer: &DecodedBuffer, target_rate: u32) -> Result<DecodedBuffer> {
    use rubato::{
        Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType,
        WindowFunction,
    };

    let source_rate = buffer.sample_rate.as_hz();
    let channels = buffer.channels as usize;
    let frames = buffer.frames();
    if frames == 0 || channels == 0 || source_rate == 0 || target_rate == 0 {
        return Ok(DecodedBuffer::new(
            Vec::new(),
            SampleRate::new(target_rate),
            buffer.channels,
        ));
    }

    let params = SincInterpolationParameters {
        sinc_len: 128,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Cubic,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let mut resampler = SincFixedIn::<f32>::new(
        f64::from(target_rate) / f64::from(source_rate),
        2.0,
        params,
        frames,
        channels,
    )
    .map_err(|e| PlaybackError::Resample(e.to_string()))?;

    let mut deinterleaved = vec![Vec::with_capacity(frames); channels];
    for frame in buffer.samples.chunks_exact(channels) {
        for (channel, sample) in deinterleaved.iter_mut().zip(frame) {
            channel.push(*sample);
        }
    }

    let resampled = resampler
        .process(&deinterleaved, None)
        .map_err(|e| PlaybackError::Resample(e.to_string()))?;

    let output_frames = resampled.first().map_or(0, Vec::len);
    let mut interleaved = Vec::with_capacity(output_frames * channels);
    for frame in 0..output_frames {
        for channel in &resampled {
            interleaved.push(channel[frame]);
        }
    }

    debug!(source_rate, target_rate, frames, output_frames, "Resampled sample");
    Ok(DecodedBuffer::new(
        interleaved,
        SampleRate::new(target_rate),
        buffer.channels,
    ))
}

/// Read position into a decoded buffer already at the device rate.
///
/// Channels beyond the source's are filled from its last channel.
struct FrameCursor {
    buffer: Arc<DecodedBuffer>,
    position: usize,
}

impl FrameCursor {
    fn new(buffer: Arc<DecodedBuffer>, offset: Duration) -> Self {
        let rate = f64::from(buffer.sample_rate.as_hz());
        let position = (offset.as_secs_f64() * rate) as usize;
        Self { buffer, position }
    }

    /// Fill `output` and return whether the buffer is exhausted.
    fn fill(&mut self, output: &mut [f32], output_channels: usize) -> bool {
        let frames = self.buffer.frames();
        let input_channels = self.buffer.channels as usize;

        if output_channels == 0 || input_channels == 0 {
            output.fill(0.0);
            return true;
        }

        for frame in output.chunks_mut(output_channels) {
            if self.position >= frames {
                frame.fill(0.0);
                continue;
            }
            let base = self.position * input_channels;
            for (channel, sample) in frame.iter_mut().enumerate() {
                *sample = self.buffer.samples[base + channel.min(input_channels - 1)];
            }
            self.position += 1;
        }

        self.position >= frames
    }
}
