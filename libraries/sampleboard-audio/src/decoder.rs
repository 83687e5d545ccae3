/// In-memory audio decoding using Symphonia
use sampleboard_core::{DecodeError, DecodedBuffer, SampleRate};
use std::io::Cursor;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

/// Turns encoded bytes into a playable buffer.
pub trait SampleDecoder: Send + Sync {
    /// Decode a whole file held in memory.
    ///
    /// `extension` is an optional container hint such as `"ogg"`.
    fn decode(&self, bytes: Vec<u8>, extension: Option<&str>) -> Result<DecodedBuffer, DecodeError>;
}

/// Audio decoder using Symphonia
///
/// Supports: MP3, FLAC, OGG/Vorbis, WAV
///
/// Output keeps the source channel count, interleaved f32 in [-1.0, 1.0].
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Check if the decoder supports the given extension
    pub fn supports_extension(&self, extension: &str) -> bool {
        matches!(
            extension.to_lowercase().as_str(),
            "mp3" | "flac" | "ogg" | "oga" | "wav"
        )
    }
}

impl SampleDecoder for SymphoniaDecoder {
    fn decode(&self, bytes: Vec<u8>, extension: Option<&str>) -> Result<DecodedBuffer, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Empty);
        }

        let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

        // Create a hint to help the format registry guess the format
        let mut hint = Hint::new();
        if let Some(ext) = extension {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| DecodeError::Probe(e.to_string()))?;

        let mut format = probed.format;

        let track = format.default_track().ok_or(DecodeError::NoAudioTrack)?;
        let track_id = track.id;
        let mut sample_rate = track.codec_params.sample_rate.unwrap_or(44100);
        let mut channels = track
            .codec_params
            .channels
            .map(|c| c.count() as u16)
            .unwrap_or(0);

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| DecodeError::Codec(format!("Failed to create decoder: {}", e)))?;

        let mut samples: Vec<f32> = Vec::new();
        let mut sample_buf: Option<SampleBuffer<f32>> = None;

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(SymphoniaError::ResetRequired) => break,
                Err(e) => {
                    return Err(DecodeError::Codec(format!("Error reading packet: {}", e)));
                }
            };

            // Skip packets that are not for the default track
            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                // A corrupt packet is skipped, the rest of the stream is still usable
                Err(SymphoniaError::DecodeError(e)) => {
                    warn!(error = %e, "Skipping undecodable packet");
                    continue;
                }
                Err(e) => return Err(DecodeError::Codec(e.to_string())),
            };

            let spec = *decoded.spec();
            sample_rate = spec.rate;
            channels = spec.channels.count() as u16;

            let buf = sample_buf
                .get_or_insert_with(|| SampleBuffer::new(decoded.capacity() as u64, spec));
            if buf.capacity() < decoded.capacity() * spec.channels.count() {
                *buf = SampleBuffer::new(decoded.capacity() as u64, spec);
            }
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }

        if samples.is_empty() || channels == 0 {
            return Err(DecodeError::Empty);
        }

        let buffer = DecodedBuffer::new(samples, SampleRate::new(sample_rate), channels);
        debug!(
            sample_rate,
            channels,
            frames = buffer.frames(),
            "Decoded sample"
        );
        Ok(buffer)
    }
}
