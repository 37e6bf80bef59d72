//! Repository for task documents.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::Collection;
use tracing::info;

use mtask_models::{InsertSummary, Task, UpdateSummary};

use crate::client::StoreClient;
use crate::error::StoreResult;
use crate::retry::{with_retry, RetryConfig};
use crate::summary::{insert_summary, update_summary};

/// Field patch applied by the task-update endpoint.
///
/// The three editable fields are always written together; everything else
/// on the document is left untouched.
#[derive(Debug, Clone)]
pub struct TaskPatch {
    pub task_name: String,
    pub sub_info: String,
    pub task_details: String,
}

/// Repository for the `tasks` collection.
#[derive(Clone)]
pub struct TasksRepository {
    collection: Collection<Task>,
    retry: RetryConfig,
}

impl TasksRepository {
    /// Create a new tasks repository.
    pub fn new(store: &StoreClient) -> Self {
        Self {
            collection: store.database().collection("tasks"),
            retry: store.retry().clone(),
        }
    }

    /// Insert a new task document.
    pub async fn insert(&self, task: &Task) -> StoreResult<InsertSummary> {
        let result = with_retry(&self.retry, "tasks.insert", || async {
            Ok(self.collection.insert_one(task).await?)
        })
        .await?;
        info!(provider = %task.task_provider.email, "Created task");
        Ok(insert_summary(result))
    }

    /// List every task document.
    pub async fn list(&self) -> StoreResult<Vec<Task>> {
        with_retry(&self.retry, "tasks.list", || async {
            let cursor = self.collection.find(doc! {}).await?;
            Ok(cursor.try_collect().await?)
        })
        .await
    }

    /// List tasks posted by one provider.
    pub async fn list_by_provider(&self, email: &str) -> StoreResult<Vec<Task>> {
        with_retry(&self.retry, "tasks.list_by_provider", || async {
            let cursor = self
                .collection
                .find(doc! { "taskProvider.email": email })
                .await?;
            Ok(cursor.try_collect().await?)
        })
        .await
    }

    /// Get a single task by id. Absent tasks are `None`, not an error.
    pub async fn get(&self, id: ObjectId) -> StoreResult<Option<Task>> {
        with_retry(&self.retry, "tasks.get", || async {
            Ok(self.collection.find_one(doc! { "_id": id }).await?)
        })
        .await
    }

    /// Merge-patch the editable fields of a task.
    ///
    /// When `owner` is given, the filter requires `taskProvider.email` to
    /// match, so a non-owning caller produces a matched count of zero
    /// instead of a write.
    pub async fn update_details(
        &self,
        id: ObjectId,
        owner: Option<&str>,
        patch: &TaskPatch,
    ) -> StoreResult<UpdateSummary> {
        let mut filter = doc! { "_id": id };
        if let Some(email) = owner {
            filter.insert("taskProvider.email", email);
        }
        let update = doc! { "$set": patch_to_set(patch) };

        let result = with_retry(&self.retry, "tasks.update_details", || {
            let filter = filter.clone();
            let update = update.clone();
            async move { Ok(self.collection.update_one(filter, update).await?) }
        })
        .await?;
        Ok(update_summary(result))
    }
}

/// `$set` document for a task patch.
fn patch_to_set(patch: &TaskPatch) -> Document {
    doc! {
        "taskName": patch.task_name.as_str(),
        "subInfo": patch.sub_info.as_str(),
        "taskDetails": patch.task_details.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_touches_only_editable_fields() {
        let patch = TaskPatch {
            task_name: "New name".to_string(),
            sub_info: "new sub".to_string(),
            task_details: "new details".to_string(),
        };
        let set = patch_to_set(&patch);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get_str("taskName").unwrap(), "New name");
        assert_eq!(set.get_str("subInfo").unwrap(), "new sub");
        assert_eq!(set.get_str("taskDetails").unwrap(), "new details");
        assert!(set.get("taskProvider").is_none());
    }
}
