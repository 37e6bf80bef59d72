//! Conversions from driver results to serializable summaries.

use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};

use mtask_models::{DeleteSummary, InsertSummary, UpdateSummary};

pub(crate) fn insert_summary(result: InsertOneResult) -> InsertSummary {
    let inserted_id = result
        .inserted_id
        .as_object_id()
        .map(|oid| oid.to_hex())
        .unwrap_or_else(|| result.inserted_id.to_string());
    InsertSummary {
        acknowledged: true,
        inserted_id,
    }
}

pub(crate) fn update_summary(result: UpdateResult) -> UpdateSummary {
    UpdateSummary {
        acknowledged: true,
        matched_count: result.matched_count,
        modified_count: result.modified_count,
    }
}

pub(crate) fn delete_summary(result: DeleteResult) -> DeleteSummary {
    DeleteSummary {
        acknowledged: true,
        deleted_count: result.deleted_count,
    }
}
