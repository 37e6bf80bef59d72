//! Task documents.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::serialize_optional_oid_as_hex;

/// Owning user reference embedded in every task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskProvider {
    pub email: String,

    /// Display fields the client attaches (name, photo, ...) are kept as-is.
    #[serde(flatten)]
    pub extra: Document,
}

/// A posted micro-task.
///
/// Wire field names keep the original camelCase contract; anything beyond
/// the named fields is persisted verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(
        rename = "_id",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_oid_as_hex"
    )]
    pub id: Option<ObjectId>,

    #[serde(rename = "taskName")]
    pub task_name: String,

    #[serde(rename = "subInfo")]
    pub sub_info: String,

    #[serde(rename = "taskDetails")]
    pub task_details: String,

    #[serde(rename = "taskProvider")]
    pub task_provider: TaskProvider,

    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_maps_camel_case_wire_names() {
        let task: Task = serde_json::from_str(
            r#"{
                "taskName": "Label 20 images",
                "subInfo": "labeling",
                "taskDetails": "Draw boxes around cats",
                "taskProvider": {"email": "buyer@x.com", "name": "Bo"},
                "payableAmount": 4,
                "requiredWorkers": 20
            }"#,
        )
        .unwrap();

        assert_eq!(task.task_name, "Label 20 images");
        assert_eq!(task.task_provider.email, "buyer@x.com");
        assert_eq!(task.task_provider.extra.get_str("name").unwrap(), "Bo");
        assert_eq!(task.extra.get_i64("payableAmount").unwrap(), 4);
        assert_eq!(task.extra.get_i64("requiredWorkers").unwrap(), 20);
    }

    #[test]
    fn task_serializes_id_as_plain_hex() {
        let oid = ObjectId::new();
        let task = Task {
            id: Some(oid),
            task_name: "t".to_string(),
            sub_info: "s".to_string(),
            task_details: "d".to_string(),
            task_provider: TaskProvider {
                email: "a@x.com".to_string(),
                extra: Document::new(),
            },
            extra: Document::new(),
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["_id"], serde_json::json!(oid.to_hex()));
        assert_eq!(value["taskName"], serde_json::json!("t"));
    }

    #[test]
    fn new_task_omits_id_when_serialized() {
        let task: Task = serde_json::from_str(
            r#"{"taskName":"t","subInfo":"s","taskDetails":"d","taskProvider":{"email":"a@x.com"}}"#,
        )
        .unwrap();
        let value = serde_json::to_value(&task).unwrap();
        assert!(value.get("_id").is_none());
    }
}
