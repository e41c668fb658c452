//! Artifact extraction and outcome classification
//!
//! Both functions are pure: the same snapshot always yields the same result.
//!
//! Artifact presence is the authoritative success signal, ahead of the status
//! label. This is a compatibility assumption about current providers, which
//! do not agree on a terminal "completed" vocabulary and have been seen to
//! attach a late `failed` label to an artifact-complete response.

use serde::{Deserialize, Serialize};

use super::status::StatusSnapshot;

/// Artifact kind carrying the rendered video
pub const VIDEO_KIND: &str = "video";

/// Artifact kind carrying the shareable link
pub const SHARE_URL_KIND: &str = "share_url";

/// URLs of the artifacts a job needs before it counts as done
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedArtifacts {
    pub video_url: Option<String>,
    pub share_url: Option<String>,
}

impl ExtractedArtifacts {
    pub fn is_complete(&self) -> bool {
        self.video_url.is_some() && self.share_url.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.video_url.is_none() && self.share_url.is_none()
    }
}

/// How a job stands after a status read
///
/// `Pending` is the only non-terminal variant. The poller never returns it;
/// it turns into `TimedOut` once the deadline passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Success {
        video_url: String,
        share_url: String,
    },
    Failed {
        error_code: String,
        error_message: String,
    },
    TimedOut,
    Pending,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Pending)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success { .. } => "success",
            Outcome::Failed { .. } => "failed",
            Outcome::TimedOut => "timed_out",
            Outcome::Pending => "pending",
        }
    }
}

/// Finds the first `video` and `share_url` artifacts
///
/// Kind matching is case-insensitive. Artifacts with an empty URL are skipped
/// and other kinds are ignored.
pub fn extract_artifacts(snapshot: &StatusSnapshot) -> ExtractedArtifacts {
    let mut found = ExtractedArtifacts::default();

    for artifact in &snapshot.artifacts {
        let url = artifact.url.trim();
        if url.is_empty() {
            continue;
        }

        let kind = artifact.kind.trim();
        if found.video_url.is_none() && kind.eq_ignore_ascii_case(VIDEO_KIND) {
            found.video_url = Some(url.to_string());
        } else if found.share_url.is_none() && kind.eq_ignore_ascii_case(SHARE_URL_KIND) {
            found.share_url = Some(url.to_string());
        }

        if found.is_complete() {
            break;
        }
    }

    found
}

/// Classifies a snapshot given its extracted artifacts
pub fn classify(snapshot: &StatusSnapshot, artifacts: &ExtractedArtifacts) -> Outcome {
    match (&artifacts.video_url, &artifacts.share_url) {
        (Some(video_url), Some(share_url)) => Outcome::Success {
            video_url: video_url.clone(),
            share_url: share_url.clone(),
        },
        _ if snapshot.is_failed_label() => Outcome::Failed {
            error_code: snapshot.error_code.clone().unwrap_or_default(),
            error_message: snapshot.error_message.clone().unwrap_or_default(),
        },
        _ => Outcome::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::Artifact;

    fn snapshot(status: &str, artifacts: &[(&str, &str)]) -> StatusSnapshot {
        StatusSnapshot {
            status: status.to_string(),
            artifacts: artifacts
                .iter()
                .map(|(kind, url)| Artifact::new(*kind, *url))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_extract_first_of_each_kind() {
        let snap = snapshot(
            "done",
            &[
                ("thumbnail", "t0"),
                ("VIDEO", "u1"),
                ("video", "u1-late"),
                ("Share_URL", "u2"),
            ],
        );
        let found = extract_artifacts(&snap);
        assert_eq!(found.video_url.as_deref(), Some("u1"));
        assert_eq!(found.share_url.as_deref(), Some("u2"));
    }

    #[test]
    fn test_extract_skips_empty_urls() {
        let snap = snapshot("processing", &[("video", ""), ("video", "u1")]);
        let found = extract_artifacts(&snap);
        assert_eq!(found.video_url.as_deref(), Some("u1"));
        assert!(found.share_url.is_none());
    }

    #[test]
    fn test_extract_nothing() {
        let found = extract_artifacts(&snapshot("pending", &[]));
        assert!(found.is_empty());
        assert!(!found.is_complete());
    }

    #[test]
    fn test_classify_success() {
        let snap = snapshot("done", &[("video", "u1"), ("share_url", "u2")]);
        let outcome = classify(&snap, &extract_artifacts(&snap));
        assert_eq!(
            outcome,
            Outcome::Success {
                video_url: "u1".to_string(),
                share_url: "u2".to_string()
            }
        );
    }

    #[test]
    fn test_artifacts_win_over_failed_label() {
        let mut snap = snapshot("failed", &[("video", "u1"), ("share_url", "u2")]);
        snap.error_code = Some("E1".to_string());
        let outcome = classify(&snap, &extract_artifacts(&snap));
        assert!(matches!(outcome, Outcome::Success { .. }));
    }

    #[test]
    fn test_classify_failed_with_partial_artifacts() {
        let mut snap = snapshot("failed", &[("video", "u1")]);
        snap.error_code = Some("E1".to_string());
        snap.error_message = Some("bad input".to_string());
        let outcome = classify(&snap, &extract_artifacts(&snap));
        assert_eq!(
            outcome,
            Outcome::Failed {
                error_code: "E1".to_string(),
                error_message: "bad input".to_string()
            }
        );
    }

    #[test]
    fn test_classify_failed_without_details() {
        let snap = snapshot("failed", &[]);
        let outcome = classify(&snap, &extract_artifacts(&snap));
        assert_eq!(
            outcome,
            Outcome::Failed {
                error_code: String::new(),
                error_message: String::new()
            }
        );
    }

    #[test]
    fn test_classify_pending() {
        for status in ["pending", "processing", "completed", ""] {
            let snap = snapshot(status, &[("share_url", "u2")]);
            let outcome = classify(&snap, &extract_artifacts(&snap));
            assert_eq!(outcome, Outcome::Pending, "status {status:?}");
            assert!(!outcome.is_terminal());
        }
    }

    #[test]
    fn test_classify_is_repeatable() {
        let snap = snapshot("failed", &[("video", "u1"), ("share_url", "u2")]);
        let artifacts = extract_artifacts(&snap);
        let first = classify(&snap, &artifacts);
        for _ in 0..5 {
            assert_eq!(classify(&snap, &extract_artifacts(&snap)), first);
        }
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let value = serde_json::to_value(Outcome::TimedOut).unwrap();
        assert_eq!(value, serde_json::json!({"outcome": "timed_out"}));
    }
}
