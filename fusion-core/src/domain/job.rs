//! Job domain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// How the voice track of a fusion video is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceMode {
    /// Text-to-speech from a voice id and a script
    Tts,
    /// A pre-recorded audio track
    Audio,
}

impl VoiceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceMode::Tts => "tts",
            VoiceMode::Audio => "audio",
        }
    }
}

impl fmt::Display for VoiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoiceMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tts" => Ok(VoiceMode::Tts),
            "audio" => Ok(VoiceMode::Audio),
            _ => Err(ValidationError::UnknownVoiceMode(s.to_string())),
        }
    }
}

/// Voice parameters, one variant per voice mode
///
/// Holding the parameters in an enum makes "exactly one of tts/audio"
/// impossible to violate once a `JobRequest` exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceParams {
    Tts { voice_id: String, script: String },
    Audio { audio_url: String },
}

impl VoiceParams {
    pub fn mode(&self) -> VoiceMode {
        match self {
            VoiceParams::Tts { .. } => VoiceMode::Tts,
            VoiceParams::Audio { .. } => VoiceMode::Audio,
        }
    }
}

/// Raw, unvalidated job parameters as supplied by the caller
///
/// Every field is optional; `JobRequest::try_from` decides whether the
/// combination is acceptable.
#[derive(Debug, Clone, Default)]
pub struct JobParams {
    pub face_image_url: Option<String>,
    pub voice_mode: Option<String>,
    pub voice_id: Option<String>,
    pub script: Option<String>,
    pub audio_url: Option<String>,
    pub aspect_ratio: Option<String>,
    pub consent: bool,
    pub provider: Option<String>,
    pub tags: Vec<String>,
}

/// A validated fusion job request
///
/// Immutable once built. Construct it with `JobRequest::try_from(JobParams)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    face_image_url: String,
    voice: VoiceParams,
    aspect_ratio: Option<String>,
    consent: bool,
    provider: Option<String>,
    tags: Vec<String>,
}

impl JobRequest {
    pub fn face_image_url(&self) -> &str {
        &self.face_image_url
    }

    pub fn voice(&self) -> &VoiceParams {
        &self.voice
    }

    pub fn voice_mode(&self) -> VoiceMode {
        self.voice.mode()
    }

    pub fn aspect_ratio(&self) -> Option<&str> {
        self.aspect_ratio.as_deref()
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl TryFrom<JobParams> for JobRequest {
    type Error = ValidationError;

    fn try_from(params: JobParams) -> Result<Self, Self::Error> {
        let face_image_url =
            present(params.face_image_url).ok_or(ValidationError::MissingFaceImage)?;

        let mode = match present(params.voice_mode) {
            Some(raw) => raw.parse::<VoiceMode>()?,
            None => return Err(ValidationError::UnknownVoiceMode(String::new())),
        };

        let voice_id = present(params.voice_id);
        let script = present(params.script);
        let audio_url = present(params.audio_url);

        let voice = match mode {
            VoiceMode::Tts => {
                if audio_url.is_some() {
                    return Err(ValidationError::ConflictingVoiceParams {
                        mode: "tts",
                        conflicting: "audio",
                    });
                }
                VoiceParams::Tts {
                    voice_id: voice_id.ok_or(ValidationError::MissingVoiceId)?,
                    script: script.ok_or(ValidationError::MissingScript)?,
                }
            }
            VoiceMode::Audio => {
                if voice_id.is_some() || script.is_some() {
                    return Err(ValidationError::ConflictingVoiceParams {
                        mode: "audio",
                        conflicting: "tts",
                    });
                }
                VoiceParams::Audio {
                    audio_url: audio_url.ok_or(ValidationError::MissingAudio)?,
                }
            }
        };

        Ok(Self {
            face_image_url,
            voice,
            aspect_ratio: present(params.aspect_ratio),
            consent: params.consent,
            provider: present(params.provider),
            tags: params
                .tags
                .into_iter()
                .filter(|t| !t.trim().is_empty())
                .collect(),
        })
    }
}

/// Blank strings count as absent
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A job accepted by the provider
///
/// Only the provider advances its state; the caller just holds the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl Job {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            submitted_at: chrono::Utc::now(),
        }
    }
}
