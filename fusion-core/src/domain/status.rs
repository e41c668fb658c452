//! Status snapshot types
//!
//! A `StatusSnapshot` is one point-in-time read of a job as reported by the
//! provider. Snapshots are never cached; each poll yields a fresh one.

use serde::{Deserialize, Deserializer, Serialize};

/// Status label the provider uses to report an explicit failure
pub const FAILED_STATUS: &str = "failed";

/// A named output reference attached to a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(default, deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

impl Artifact {
    pub fn new(kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            url: url.into(),
        }
    }
}

/// One read of a job's state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_artifacts")]
    pub artifacts: Vec<Artifact>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub provider_job_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_code: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_message: Option<String>,
}

impl StatusSnapshot {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Default::default()
        }
    }

    pub fn is_failed_label(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(FAILED_STATUS)
    }
}

/// Render a scalar JSON value as a string
///
/// Providers are inconsistent about numbers vs strings for ids and error
/// codes; both are accepted.
pub fn json_scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(json_scalar_to_string))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

/// Entries that are not artifact objects are dropped instead of failing the read
fn lenient_artifacts<'de, D>(deserializer: D) -> Result<Vec<Artifact>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(entries)) => entries,
        _ => return Ok(Vec::new()),
    };

    Ok(entries
        .into_iter()
        .filter(serde_json::Value::is_object)
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classify::{Outcome, classify, extract_artifacts};
    use serde_json::json;

    #[test]
    fn test_parse_full_snapshot() {
        let snapshot: StatusSnapshot = serde_json::from_value(json!({
            "status": "done",
            "artifacts": [
                {"kind": "video", "url": "u1"},
                {"kind": "share_url", "url": "u2"}
            ],
            "provider_job_id": "P-9"
        }))
        .unwrap();

        assert_eq!(snapshot.status, "done");
        assert_eq!(snapshot.artifacts.len(), 2);
        assert_eq!(snapshot.provider_job_id.as_deref(), Some("P-9"));
        assert!(snapshot.error_code.is_none());
    }

    #[test]
    fn test_parse_sparse_snapshot() {
        let snapshot: StatusSnapshot = serde_json::from_value(json!({})).unwrap();
        assert_eq!(snapshot, StatusSnapshot::default());

        let snapshot: StatusSnapshot =
            serde_json::from_value(json!({"status": null, "artifacts": null})).unwrap();
        assert_eq!(snapshot.status, "");
        assert!(snapshot.artifacts.is_empty());
    }

    #[test]
    fn test_numeric_error_code_accepted() {
        let snapshot: StatusSnapshot = serde_json::from_value(json!({
            "status": "failed",
            "error_code": 422,
            "error_message": "bad input"
        }))
        .unwrap();
        assert_eq!(snapshot.error_code.as_deref(), Some("422"));
        assert!(snapshot.is_failed_label());
    }

    #[test]
    fn test_malformed_artifacts_do_not_fail_the_read() {
        let snapshot: StatusSnapshot = serde_json::from_value(json!({
            "status": "done",
            "artifacts": [
                {"kind": "video", "url": "u1"},
                {"kind": "share_url", "url": "u2"},
                {"kind": "thumbnail", "url": null},
                {"kind": null, "url": "u3"},
                "not-an-artifact",
                42
            ]
        }))
        .unwrap();

        assert_eq!(snapshot.artifacts.len(), 4);
        assert_eq!(snapshot.artifacts[2], Artifact::new("thumbnail", ""));
        assert_eq!(snapshot.artifacts[3], Artifact::new("", "u3"));

        let artifacts = extract_artifacts(&snapshot);
        assert_eq!(
            classify(&snapshot, &artifacts),
            Outcome::Success {
                video_url: "u1".to_string(),
                share_url: "u2".to_string()
            }
        );
    }

    #[test]
    fn test_non_array_artifacts_treated_as_empty() {
        let snapshot: StatusSnapshot =
            serde_json::from_value(json!({"status": "processing", "artifacts": {"video": "u1"}}))
                .unwrap();
        assert!(snapshot.artifacts.is_empty());
    }

    #[test]
    fn test_failed_label_match() {
        assert!(StatusSnapshot::with_status("FAILED").is_failed_label());
        assert!(!StatusSnapshot::with_status("failing").is_failed_label());
    }
}
