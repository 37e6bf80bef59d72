//! Serializable write-result summaries.
//!
//! Handlers return these in place of the driver's result structs, with the
//! field names the original API exposed to clients.

use serde::{Deserialize, Serialize};

/// Outcome of an insert-one operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertSummary {
    pub acknowledged: bool,
    /// Hex form of the generated document id.
    pub inserted_id: String,
}

/// Outcome of an update-one operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Outcome of a delete-one operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSummary {
    pub acknowledged: bool,
    pub deleted_count: u64,
}
