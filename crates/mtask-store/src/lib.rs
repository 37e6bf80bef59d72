//! MongoDB persistence gateway.
//!
//! This crate provides:
//! - A process-owned `StoreClient` with an explicit startup lifecycle
//! - Typed repositories for the users, tasks, purchases and submissions
//!   collections
//! - Bounded retry with exponential backoff for transient driver failures

pub mod client;
pub mod error;
pub mod purchases_repo;
pub mod retry;
pub mod submissions_repo;
pub mod tasks_repo;
pub mod users_repo;

mod summary;

pub use client::{StoreClient, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use purchases_repo::PurchasesRepository;
pub use retry::RetryConfig;
pub use submissions_repo::SubmissionsRepository;
pub use tasks_repo::{TaskPatch, TasksRepository};
pub use users_repo::UsersRepository;

use mongodb::bson::oid::ObjectId;

/// Parse a document id from its external hex form.
///
/// Ids arrive as path parameters; a malformed one must fail the lookup
/// before it reaches the driver.
pub fn parse_object_id(raw: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| StoreError::InvalidId(raw.to_string()))
}
