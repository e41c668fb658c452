//! Validation errors for job requests

use thiserror::Error;

/// A job request violates its invariants
///
/// Raised before any network call is made and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("face image URL is required")]
    MissingFaceImage,

    #[error("unknown voice mode '{0}' (expected 'tts' or 'audio')")]
    UnknownVoiceMode(String),

    #[error("voice mode 'tts' requires a voice id")]
    MissingVoiceId,

    #[error("voice mode 'tts' requires a script")]
    MissingScript,

    #[error("voice mode 'audio' requires an audio URL")]
    MissingAudio,

    #[error("voice mode '{mode}' conflicts with supplied {conflicting} parameters")]
    ConflictingVoiceParams {
        mode: &'static str,
        conflicting: &'static str,
    },
}
