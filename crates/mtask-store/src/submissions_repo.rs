//! Repository for submission documents.

use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::Collection;
use tracing::info;

use mtask_models::{DeleteSummary, InsertSummary, Submission, SubmissionStatus, UpdateSummary};

use crate::client::StoreClient;
use crate::error::StoreResult;
use crate::retry::{with_retry, RetryConfig};
use crate::summary::{delete_summary, insert_summary, update_summary};

/// Repository for the `submission` collection.
#[derive(Clone)]
pub struct SubmissionsRepository {
    collection: Collection<Submission>,
    retry: RetryConfig,
}

impl SubmissionsRepository {
    /// Create a new submissions repository.
    pub fn new(store: &StoreClient) -> Self {
        Self {
            // Singular name kept for data compatibility with existing deployments
            collection: store.database().collection("submission"),
            retry: store.retry().clone(),
        }
    }

    /// Insert a new submission document.
    pub async fn insert(&self, submission: &Submission) -> StoreResult<InsertSummary> {
        let result = with_retry(&self.retry, "submissions.insert", || async {
            Ok(self.collection.insert_one(submission).await?)
        })
        .await?;
        info!(worker = %submission.worker_email, "Created submission");
        Ok(insert_summary(result))
    }

    /// List every submission.
    pub async fn list(&self) -> StoreResult<Vec<Submission>> {
        with_retry(&self.retry, "submissions.list", || async {
            let cursor = self.collection.find(doc! {}).await?;
            Ok(cursor.try_collect().await?)
        })
        .await
    }

    /// List submissions handed in by one worker.
    pub async fn list_by_worker(&self, email: &str) -> StoreResult<Vec<Submission>> {
        with_retry(&self.retry, "submissions.list_by_worker", || async {
            let cursor = self
                .collection
                .find(doc! { "workerEmail": email })
                .await?;
            Ok(cursor.try_collect().await?)
        })
        .await
    }

    /// Merge-patch the review status of a submission.
    pub async fn set_status(
        &self,
        id: ObjectId,
        status: SubmissionStatus,
    ) -> StoreResult<UpdateSummary> {
        let result = with_retry(&self.retry, "submissions.set_status", || async {
            Ok(self
                .collection
                .update_one(
                    doc! { "_id": id },
                    doc! { "$set": { "status": status.as_str() } },
                )
                .await?)
        })
        .await?;
        info!(id = %id, status = %status.as_str(), "Updated submission status");
        Ok(update_summary(result))
    }

    /// Delete a submission.
    ///
    /// When `owner` is given, the filter requires `workerEmail` to match,
    /// so a non-owning caller deletes nothing.
    pub async fn delete(&self, id: ObjectId, owner: Option<&str>) -> StoreResult<DeleteSummary> {
        let mut filter = doc! { "_id": id };
        if let Some(email) = owner {
            filter.insert("workerEmail", email);
        }

        let result = with_retry(&self.retry, "submissions.delete", || {
            let filter = filter.clone();
            async move { Ok(self.collection.delete_one(filter).await?) }
        })
        .await?;
        Ok(delete_summary(result))
    }
}
