//! Submission documents and the status enumeration.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::serialize_optional_oid_as_hex;

/// Review state of a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Awaiting review.
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    /// Returns the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parse from the wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Work handed in by a worker against a posted task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_oid_as_hex"
    )]
    pub id: Option<ObjectId>,

    #[serde(rename = "workerEmail")]
    pub worker_email: String,

    /// New submissions start out pending.
    #[serde(default)]
    pub status: SubmissionStatus,

    /// Submission content (task reference, proof text, payable amount, ...)
    /// is persisted verbatim.
    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        let submission: Submission = serde_json::from_str(
            r#"{"workerEmail":"w@x.com","taskId":"abc","submissionDetails":"done"}"#,
        )
        .unwrap();
        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert_eq!(submission.worker_email, "w@x.com");
        assert_eq!(submission.extra.get_str("taskId").unwrap(), "abc");
    }

    #[test]
    fn status_parses_wire_strings() {
        assert_eq!(SubmissionStatus::parse("pending"), Some(SubmissionStatus::Pending));
        assert_eq!(SubmissionStatus::parse("approved"), Some(SubmissionStatus::Approved));
        assert_eq!(SubmissionStatus::parse("rejected"), Some(SubmissionStatus::Rejected));
        assert_eq!(SubmissionStatus::parse("done"), None);
    }

    #[test]
    fn status_round_trips_through_serde() {
        let json = serde_json::to_string(&SubmissionStatus::Approved).unwrap();
        assert_eq!(json, r#""approved""#);
        let back: SubmissionStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SubmissionStatus::Approved);
    }
}
