//! Core domain types
//!
//! These types describe a fusion job from the caller's side: what is
//! submitted, what a status read looks like, and how a job ends.

pub mod classify;
pub mod job;
pub mod status;

pub use classify::{ExtractedArtifacts, Outcome, classify, extract_artifacts};
pub use job::{Job, JobParams, JobRequest, VoiceMode, VoiceParams};
pub use status::{Artifact, StatusSnapshot};
