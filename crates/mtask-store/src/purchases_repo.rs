//! Repository for coin purchase documents.

use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use tracing::info;

use mtask_models::{InsertSummary, Purchase};

use crate::client::StoreClient;
use crate::error::StoreResult;
use crate::retry::{with_retry, RetryConfig};
use crate::summary::insert_summary;

/// Repository for the `purchases` collection.
///
/// Purchases are append-only; there is no update or delete path.
#[derive(Clone)]
pub struct PurchasesRepository {
    collection: Collection<Purchase>,
    retry: RetryConfig,
}

impl PurchasesRepository {
    /// Create a new purchases repository.
    pub fn new(store: &StoreClient) -> Self {
        Self {
            collection: store.database().collection("purchases"),
            retry: store.retry().clone(),
        }
    }

    /// Record a completed coin purchase.
    pub async fn insert(&self, purchase: &Purchase) -> StoreResult<InsertSummary> {
        let result = with_retry(&self.retry, "purchases.insert", || async {
            Ok(self.collection.insert_one(purchase).await?)
        })
        .await?;
        info!(email = %purchase.email, "Recorded coin purchase");
        Ok(insert_summary(result))
    }

    /// List every purchase.
    pub async fn list(&self) -> StoreResult<Vec<Purchase>> {
        with_retry(&self.retry, "purchases.list", || async {
            let cursor = self.collection.find(doc! {}).await?;
            Ok(cursor.try_collect().await?)
        })
        .await
    }

    /// List purchases made by one user.
    pub async fn list_by_email(&self, email: &str) -> StoreResult<Vec<Purchase>> {
        with_retry(&self.retry, "purchases.list_by_email", || async {
            let cursor = self.collection.find(doc! { "email": email }).await?;
            Ok(cursor.try_collect().await?)
        })
        .await
    }
}
