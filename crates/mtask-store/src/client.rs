//! MongoDB client lifecycle.

use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::retry::RetryConfig;

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string.
    pub uri: String,
    /// Database name.
    pub database: String,
    /// Retry policy for driver operations.
    pub retry: RetryConfig,
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        let uri = std::env::var("MONGODB_URI")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| StoreError::Config("MONGODB_URI is not set".to_string()))?;

        let database =
            std::env::var("MONGODB_DB").unwrap_or_else(|_| "taskProvider".to_string());

        Ok(Self {
            uri,
            database,
            retry: RetryConfig::from_env(),
        })
    }
}

/// Process-owned handle to the document store.
///
/// Built once at startup and shared across requests; the driver maintains
/// its own connection pool underneath.
#[derive(Clone)]
pub struct StoreClient {
    db: Database,
    retry: RetryConfig,
}

impl StoreClient {
    /// Connect to the store described by `config`.
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let db = client.database(&config.database);
        Ok(Self {
            db,
            retry: config.retry,
        })
    }

    /// Connect using environment variables.
    pub async fn from_env() -> StoreResult<Self> {
        Self::connect(StoreConfig::from_env()?).await
    }

    /// Round-trip a ping, proving the deployment is reachable.
    pub async fn ping(&self) -> StoreResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB database {}", self.db.name());
        Ok(())
    }

    pub(crate) fn database(&self) -> &Database {
        &self.db
    }

    pub(crate) fn retry(&self) -> &RetryConfig {
        &self.retry
    }
}
