//! End-to-end tests: HTTP fetch, Symphonia decode and simulated playback
//! against a mock server serving generated WAV files.

use sampleboard_audio::{
    AudioCardController, AudioCardRenderer, CardState, HttpSampleFetcher, LoadPolicy,
    PlaybackGlyph, SampleDecoder, SampleError, SampleFetcher, SampleLoader, SimulatedBackend,
    SymphoniaDecoder,
};
use sampleboard_core::{
    messages, AudioSampleDescriptor, DecodeError, ErrorSlot, FetchError, HttpSettings,
};
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Render a sine tone as an in-memory 16-bit WAV file.
fn wav_bytes(sample_rate: u32, channels: u16, frames: u32) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for n in 0..frames {
            let t = n as f32 / sample_rate as f32;
            let value = (t * 440.0 * 2.0 * std::f32::consts::PI).sin();
            for _ in 0..channels {
                writer.write_sample((value * i16::MAX as f32 * 0.5) as i16).unwrap();
            }
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

#[derive(Default)]
struct Cards {
    names: Vec<String>,
    glyphs: Vec<PlaybackGlyph>,
    error: Option<String>,
}

impl ErrorSlot for Cards {
    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

impl AudioCardRenderer for Cards {
    fn clear_cards(&mut self) {
        self.names.clear();
        self.glyphs.clear();
    }

    fn append_card(&mut self, _index: usize, name: &str) {
        self.names.push(name.to_string());
        self.glyphs.push(PlaybackGlyph::Play);
    }

    fn set_glyph(&mut self, index: usize, glyph: PlaybackGlyph) {
        self.glyphs[index] = glyph;
    }
}

async fn serve(server: &MockServer, route: &str, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

fn fetcher() -> Arc<HttpSampleFetcher> {
    Arc::new(HttpSampleFetcher::new(&HttpSettings::default()).unwrap())
}

#[test]
fn decodes_stereo_wav() {
    let bytes = wav_bytes(48_000, 2, 4_800);
    let buffer = SymphoniaDecoder::new().decode(bytes, Some("wav")).unwrap();

    assert_eq!(buffer.sample_rate.as_hz(), 48_000);
    assert_eq!(buffer.channels, 2);
    assert_eq!(buffer.frames(), 4_800);
    assert!(buffer.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    assert!(buffer.samples.iter().any(|s| s.abs() > 0.1));
}

#[test]
fn decodes_without_extension_hint() {
    let bytes = wav_bytes(22_050, 1, 2_205);
    let buffer = SymphoniaDecoder::new().decode(bytes, None).unwrap();
    assert_eq!(buffer.channels, 1);
    assert_eq!(buffer.frames(), 2_205);
    let millis = buffer.duration().as_millis();
    assert!((99..=100).contains(&millis));
}

#[tokio::test]
async fn fetcher_downloads_bytes() {
    let server = MockServer::start().await;
    serve(&server, "/kit.wav", vec![1, 2, 3, 4]).await;

    let descriptor = AudioSampleDescriptor::new("kit", format!("{}/kit.wav", server.uri()));
    let bytes = fetcher().fetch(&descriptor).await.unwrap();
    assert_eq!(bytes, [1, 2, 3, 4]);
}

#[tokio::test]
async fn fetcher_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let descriptor = AudioSampleDescriptor::new("kit", format!("{}/kit.wav", server.uri()));
    let err = fetcher().fetch(&descriptor).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 403, .. }));
}

#[tokio::test]
async fn fetcher_rejects_non_http_endpoint() {
    let descriptor = AudioSampleDescriptor::new("kit", "file:///tmp/kit.wav");
    let err = fetcher().fetch(&descriptor).await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidUrl(_)));
}

#[tokio::test]
async fn loader_distinguishes_fetch_and_decode_failures() {
    let server = MockServer::start().await;
    serve(&server, "/good.wav", wav_bytes(44_100, 1, 441)).await;
    serve(&server, "/noise.ogg", b"not vorbis at all".repeat(32)).await;
    Mock::given(method("GET"))
        .and(path("/missing.ogg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let catalog = vec![
        AudioSampleDescriptor::new("good", format!("{}/good.wav", server.uri())),
        AudioSampleDescriptor::new("noise", format!("{}/noise.ogg", server.uri())),
        AudioSampleDescriptor::new("missing", format!("{}/missing.ogg", server.uri())),
    ];
    let loader = SampleLoader::new(fetcher(), Arc::new(SymphoniaDecoder::new()));
    let report = loader.load_all(&catalog, LoadPolicy::PartialSuccess).await;

    assert_eq!(report.loaded.len(), 1);
    assert_eq!(report.loaded[0].name, "good");
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].name, "noise");
    assert!(matches!(
        report.failures[0].source,
        SampleError::Decode(DecodeError::Probe(_))
    ));
    assert_eq!(report.failures[1].name, "missing");
    assert!(matches!(
        report.failures[1].source,
        SampleError::Fetch(FetchError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn cards_play_to_the_end_and_reset() {
    let server = MockServer::start().await;
    serve(&server, "/new-wave-kit.wav", wav_bytes(44_100, 2, 2_205)).await;
    serve(&server, "/synth-organ.wav", wav_bytes(44_100, 1, 4_410)).await;

    let catalog = vec![
        AudioSampleDescriptor::new("new wave sample", format!("{}/new-wave-kit.wav", server.uri())),
        AudioSampleDescriptor::new("synth organ sample", format!("{}/synth-organ.wav", server.uri())),
    ];
    let mut controller = AudioCardController::new(
        catalog,
        fetcher(),
        Arc::new(SymphoniaDecoder::new()),
        Arc::new(SimulatedBackend),
        Cards::default(),
    );

    assert_eq!(controller.load().await, 2);
    assert_eq!(
        controller.renderer().names,
        ["new wave sample", "synth organ sample"]
    );

    controller.toggle_playback(0).unwrap();
    assert_eq!(controller.renderer().glyphs[0], PlaybackGlyph::Pause);

    // 50 ms of audio; the simulated backend finishes shortly after
    let event = tokio::time::timeout(Duration::from_secs(5), controller.next_event())
        .await
        .unwrap()
        .unwrap();
    assert!(controller.handle_event(event));
    assert_eq!(controller.card_state(0), Some(CardState::Stopped));
    assert_eq!(controller.renderer().glyphs[0], PlaybackGlyph::Play);
    assert!(controller.renderer().error.is_none());
}

#[tokio::test]
async fn unreachable_server_blanks_widget() {
    let server = MockServer::start().await;
    serve(&server, "/a.wav", wav_bytes(44_100, 1, 441)).await;
    let base = server.uri();

    let catalog = vec![
        AudioSampleDescriptor::new("a", format!("{}/a.wav", base)),
        // Nothing listens on port 9 in the test environment
        AudioSampleDescriptor::new("b", "http://127.0.0.1:9/b.wav"),
    ];
    let mut controller = AudioCardController::new(
        catalog,
        fetcher(),
        Arc::new(SymphoniaDecoder::new()),
        Arc::new(SimulatedBackend),
        Cards::default(),
    );

    assert_eq!(controller.load().await, 0);
    assert!(controller.renderer().names.is_empty());
    assert_eq!(
        controller.renderer().error.as_deref(),
        Some(messages::SAMPLES_LOAD_FAILED)
    );
}
