//! Liveness handler.

/// Liveness probe.
pub async fn liveness() -> &'static str {
    "Task marketplace API running"
}
