/// SampleBoard - posts viewer and audio sample player for the terminal
use clap::{Parser, Subcommand};
use sampleboard::{config::AppConfig, session, TerminalCardRenderer, TerminalPostsRenderer};
use sampleboard_audio::{
    AudioCardController, HttpSampleFetcher, LoadPolicy, PlaybackBackend, SymphoniaDecoder,
};
use sampleboard_posts::{HttpPostsSource, PostsViewController};
use std::{io, path::PathBuf, sync::Arc};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sampleboard")]
#[command(about = "Browse posts and play audio samples", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "SAMPLEBOARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch posts and browse them as an accordion
    Posts {
        /// Posts endpoint (overrides configuration)
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Load the sample catalog and play it
    Samples {
        /// all_or_nothing or partial_success (overrides configuration)
        #[arg(short, long)]
        policy: Option<LoadPolicy>,

        /// Simulate playback instead of opening an audio device
        #[arg(long)]
        silent: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sampleboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Posts { endpoint } => {
            if let Some(endpoint) = endpoint {
                config.posts.endpoint = endpoint;
            }
            config.validate()?;
            posts(&config).await?;
        }
        Commands::Samples { policy, silent } => {
            if let Some(policy) = policy {
                config.audio.load_policy = policy;
            }
            config.validate()?;
            samples(&config, silent).await?;
        }
    }

    Ok(())
}

async fn posts(config: &AppConfig) -> anyhow::Result<()> {
    tracing::info!("Posts endpoint: {}", config.posts.endpoint);

    let source = HttpPostsSource::new(&config.posts.endpoint, &config.http)?;
    let mut controller = PostsViewController::new(source, TerminalPostsRenderer::new(io::stdout()));

    // The error slot already tells the user what happened
    if controller.fetch_posts().await.is_err() {
        return Ok(());
    }

    session::run_posts(&mut controller, BufReader::new(tokio::io::stdin())).await?;
    Ok(())
}

async fn samples(config: &AppConfig, silent: bool) -> anyhow::Result<()> {
    tracing::info!(
        "Loading {} samples ({})",
        config.audio.samples.len(),
        config.audio.load_policy
    );

    let fetcher = Arc::new(HttpSampleFetcher::new(&config.http)?);
    let mut controller = AudioCardController::new(
        config.audio.samples.clone(),
        fetcher,
        Arc::new(SymphoniaDecoder::new()),
        playback_backend(silent)?,
        TerminalCardRenderer::new(io::stdout()),
    )
    .with_policy(config.audio.load_policy);

    if controller.load().await == 0 {
        return Ok(());
    }

    session::run_samples(&mut controller, BufReader::new(tokio::io::stdin())).await?;
    Ok(())
}

#[cfg(feature = "desktop")]
fn playback_backend(silent: bool) -> anyhow::Result<Arc<dyn PlaybackBackend>> {
    if silent {
        return Ok(Arc::new(sampleboard_audio::SimulatedBackend));
    }
    Ok(Arc::new(sampleboard_audio::CpalBackend::probe()?))
}

#[cfg(not(feature = "desktop"))]
fn playback_backend(silent: bool) -> anyhow::Result<Arc<dyn PlaybackBackend>> {
    if !silent {
        tracing::warn!("Built without the desktop feature, playback is simulated");
    }
    Ok(Arc::new(sampleboard_audio::SimulatedBackend))
}
