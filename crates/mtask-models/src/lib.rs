//! Shared data models for the mtask backend.
//!
//! This crate provides Serde-serializable types for:
//! - The four document collections (users, tasks, purchases, submissions)
//! - Closed enumerations for roles and submission statuses
//! - Write-result summaries returned to API callers

pub mod purchase;
pub mod result;
pub mod submission;
pub mod task;
pub mod user;

mod serde_helpers;

// Re-export common types
pub use purchase::Purchase;
pub use result::{DeleteSummary, InsertSummary, UpdateSummary};
pub use submission::{Submission, SubmissionStatus};
pub use task::{Task, TaskProvider};
pub use user::{Role, User};
