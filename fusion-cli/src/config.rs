//! Configuration module
//!
//! Maps command-line flags and their environment fallbacks onto the
//! runner `Config` and the raw job parameters. This is the only place the
//! environment is read.

use std::time::Duration;

use clap::{ArgAction, Args};
use fusion_client::{DEFAULT_CREATE_PATH, DEFAULT_STATUS_PATH};
use fusion_core::domain::job::JobParams;
use fusion_runner::Config;

/// Provider connection and polling options
#[derive(Debug, Clone, Args)]
pub struct ProviderArgs {
    /// Provider base URL
    #[arg(long, global = true, env = "FUSION_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Path of the job creation endpoint
    #[arg(long, global = true, env = "FUSION_CREATE_PATH", default_value = DEFAULT_CREATE_PATH)]
    pub create_path: String,

    /// Status endpoint path; `{job_id}` is substituted, otherwise the id is appended
    #[arg(long, global = true, env = "FUSION_STATUS_PATH", default_value = DEFAULT_STATUS_PATH)]
    pub status_path: String,

    /// Bearer token for the provider
    #[arg(long, global = true, env = "FUSION_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Overall time to wait for a job, in seconds
    #[arg(long, global = true, env = "FUSION_TIMEOUT_SECS", default_value_t = 600)]
    pub timeout_secs: u64,

    /// Seconds between status reads
    #[arg(long, global = true, env = "FUSION_POLL_INTERVAL_SECS", default_value_t = 5)]
    pub poll_interval_secs: u64,

    /// Timeout for each HTTP call, in seconds
    #[arg(long, global = true, env = "FUSION_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl ProviderArgs {
    pub fn to_config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            create_path: self.create_path.clone(),
            status_path: self.status_path.clone(),
            api_token: self.api_token.clone(),
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            max_wait: Duration::from_secs(self.timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// Fusion job parameters
#[derive(Debug, Clone, Args)]
pub struct JobArgs {
    /// URL of the target face image
    #[arg(long, env = "FUSION_FACE_IMAGE_URL")]
    pub face_image_url: Option<String>,

    /// Voice mode: tts or audio
    #[arg(long, env = "FUSION_VOICE_MODE", default_value = "tts")]
    pub voice_mode: String,

    /// TTS voice id (tts mode)
    #[arg(long, env = "FUSION_VOICE_ID")]
    pub voice_id: Option<String>,

    /// TTS script text (tts mode)
    #[arg(long, env = "FUSION_SCRIPT")]
    pub script: Option<String>,

    /// Audio track URL (audio mode)
    #[arg(long, env = "FUSION_AUDIO_URL")]
    pub audio_url: Option<String>,

    /// Output aspect ratio
    #[arg(long, env = "FUSION_ASPECT_RATIO", default_value = "9:16")]
    pub aspect_ratio: String,

    /// Provider to route the job to
    #[arg(long, env = "FUSION_PROVIDER")]
    pub provider: Option<String>,

    /// Consent to processing by an external provider
    #[arg(long, env = "FUSION_CONSENT", default_value_t = true, action = ArgAction::Set)]
    pub consent: bool,

    /// Free-form tag, repeatable
    #[arg(
        long = "tag",
        env = "FUSION_TAGS",
        value_delimiter = ',',
        default_value = "smoke-test"
    )]
    pub tags: Vec<String>,
}

impl JobArgs {
    /// Raw parameters, plus an optional extra tag
    pub fn into_params(self, extra_tag: Option<String>) -> JobParams {
        let mut tags = self.tags;
        tags.extend(extra_tag);

        JobParams {
            face_image_url: self.face_image_url,
            voice_mode: Some(self.voice_mode),
            voice_id: self.voice_id,
            script: self.script,
            audio_url: self.audio_url,
            aspect_ratio: Some(self.aspect_ratio),
            consent: self.consent,
            provider: self.provider,
            tags,
        }
    }
}
