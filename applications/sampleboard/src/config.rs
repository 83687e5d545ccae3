/// Host configuration
use crate::error::{AppError, Result};
use sampleboard_audio::{default_catalog, LoadPolicy};
use sampleboard_core::{http, AudioSampleDescriptor, HttpSettings};
use sampleboard_posts::DEFAULT_POSTS_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "sampleboard.toml";

/// Prefix of overriding environment variables, e.g. `SAMPLEBOARD_POSTS__ENDPOINT`
pub const ENV_PREFIX: &str = "SAMPLEBOARD";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_posts")]
    pub posts: PostsSettings,

    #[serde(default = "default_audio")]
    pub audio: AudioSettings,

    #[serde(default)]
    pub http: HttpSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostsSettings {
    #[serde(default = "default_posts_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AudioSettings {
    #[serde(default)]
    pub load_policy: LoadPolicy,

    #[serde(default = "default_catalog")]
    pub samples: Vec<AudioSampleDescriptor>,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `sampleboard.toml` is read
    /// when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`AppConfig::load`], reading variables from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (SAMPLEBOARD_HTTP__TIMEOUT_SECS=5)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        http::parse_endpoint(&self.posts.endpoint)
            .map_err(|e| AppError::Config(format!("posts.endpoint: {}", e)))?;

        for sample in &self.audio.samples {
            if sample.name.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "audio.samples: sample at {} has no name",
                    sample.endpoint
                )));
            }
            http::parse_endpoint(&sample.endpoint)
                .map_err(|e| AppError::Config(format!("audio.samples[{}]: {}", sample.name, e)))?;
        }

        if self.http.timeout_secs == 0 || self.http.connect_timeout_secs == 0 {
            return Err(AppError::Config(
                "http timeouts must be at least one second".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_posts() -> PostsSettings {
    PostsSettings {
        endpoint: default_posts_endpoint(),
    }
}

fn default_posts_endpoint() -> String {
    DEFAULT_POSTS_ENDPOINT.to_string()
}

fn default_audio() -> AudioSettings {
    AudioSettings {
        load_policy: LoadPolicy::default(),
        samples: default_catalog(),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            posts: default_posts(),
            audio: default_audio(),
            http: HttpSettings::default(),
        }
    }
}
