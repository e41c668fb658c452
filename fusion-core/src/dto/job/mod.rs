//! Job DTOs for the provider API

use serde::{Deserialize, Serialize};

use crate::domain::job::{JobRequest, VoiceMode, VoiceParams};
use crate::domain::status::json_scalar_to_string;

/// Body of the job creation call
///
/// Absent optional values are omitted rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobBody {
    pub face_image_url: String,
    pub voice_mode: VoiceMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_tts: Option<TtsVoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_audio: Option<AudioVoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoOptions>,
    pub consent: Consent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtsVoice {
    pub voice_id: String,
    pub script: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioVoice {
    pub audio_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoOptions {
    pub aspect_ratio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consent {
    pub external_provider_ok: bool,
}

impl From<&JobRequest> for CreateJobBody {
    fn from(request: &JobRequest) -> Self {
        let (voice_tts, voice_audio) = match request.voice() {
            VoiceParams::Tts { voice_id, script } => (
                Some(TtsVoice {
                    voice_id: voice_id.clone(),
                    script: script.clone(),
                }),
                None,
            ),
            VoiceParams::Audio { audio_url } => (
                None,
                Some(AudioVoice {
                    audio_url: audio_url.clone(),
                }),
            ),
        };

        Self {
            face_image_url: request.face_image_url().to_string(),
            voice_mode: request.voice_mode(),
            voice_tts,
            voice_audio,
            video: request.aspect_ratio().map(|ratio| VideoOptions {
                aspect_ratio: ratio.to_string(),
            }),
            consent: Consent {
                external_provider_ok: request.consent(),
            },
            provider: request.provider().map(str::to_string),
            tags: request.tags().to_vec(),
        }
    }
}

/// Field names a creation response may carry the job id under, in order
pub const JOB_ID_FIELDS: [&str; 2] = ["job_id", "id"];

/// Extracts the job id from a creation response
///
/// Checks `job_id` first, then `id`. Numeric ids are rendered as strings;
/// empty strings do not count.
pub fn job_id_from_response(body: &serde_json::Value) -> Option<String> {
    JOB_ID_FIELDS
        .iter()
        .filter_map(|field| body.get(field))
        .filter_map(json_scalar_to_string)
        .map(|id| id.trim().to_string())
        .find(|id| !id.is_empty())
}
