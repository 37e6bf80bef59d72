//! Repository for user documents.

use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use tracing::info;

use mtask_models::{InsertSummary, Role, UpdateSummary, User};

use crate::client::StoreClient;
use crate::error::StoreResult;
use crate::retry::{with_retry, RetryConfig};
use crate::summary::{insert_summary, update_summary};

/// Repository for the `users` collection.
#[derive(Clone)]
pub struct UsersRepository {
    collection: Collection<User>,
    retry: RetryConfig,
}

impl UsersRepository {
    /// Create a new users repository.
    pub fn new(store: &StoreClient) -> Self {
        Self {
            collection: store.database().collection("users"),
            retry: store.retry().clone(),
        }
    }

    /// Insert a new user document.
    pub async fn insert(&self, user: &User) -> StoreResult<InsertSummary> {
        let result = with_retry(&self.retry, "users.insert", || async {
            Ok(self.collection.insert_one(user).await?)
        })
        .await?;
        info!(email = %user.email, role = %user.role.as_str(), "Created user");
        Ok(insert_summary(result))
    }

    /// List every user document.
    pub async fn list(&self) -> StoreResult<Vec<User>> {
        with_retry(&self.retry, "users.list", || async {
            let cursor = self.collection.find(doc! {}).await?;
            Ok(cursor.try_collect().await?)
        })
        .await
    }

    /// Find a single user by email. Absent users are `None`, not an error.
    pub async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        with_retry(&self.retry, "users.find_by_email", || async {
            Ok(self.collection.find_one(doc! { "email": email }).await?)
        })
        .await
    }

    /// Merge-patch the coin balance of the user matching `email`.
    ///
    /// Only the `coin` field changes; the rest of the document is untouched.
    pub async fn set_coin(&self, email: &str, coin: i64) -> StoreResult<UpdateSummary> {
        let result = with_retry(&self.retry, "users.set_coin", || async {
            Ok(self
                .collection
                .update_one(doc! { "email": email }, doc! { "$set": { "coin": coin } })
                .await?)
        })
        .await?;
        Ok(update_summary(result))
    }

    /// Merge-patch the role of the user matching `email`.
    pub async fn set_role(&self, email: &str, role: Role) -> StoreResult<UpdateSummary> {
        let result = with_retry(&self.retry, "users.set_role", || async {
            Ok(self
                .collection
                .update_one(
                    doc! { "email": email },
                    doc! { "$set": { "role": role.as_str() } },
                )
                .await?)
        })
        .await?;
        info!(email = %email, role = %role.as_str(), "Updated user role");
        Ok(update_summary(result))
    }
}
