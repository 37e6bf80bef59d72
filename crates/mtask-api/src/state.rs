//! Application state.

use std::sync::Arc;

use mtask_payments::PaymentClient;
use mtask_store::{
    PurchasesRepository, StoreClient, SubmissionsRepository, TasksRepository, UsersRepository,
};

use crate::auth::TokenIssuer;
use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<StoreClient>,
    pub users: UsersRepository,
    pub tasks: TasksRepository,
    pub purchases: PurchasesRepository,
    pub submissions: SubmissionsRepository,
    pub payments: Arc<PaymentClient>,
    pub issuer: Arc<TokenIssuer>,
}

impl AppState {
    /// Create new application state.
    pub async fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let store = StoreClient::from_env().await?;
        let payments = PaymentClient::from_env()?;
        let issuer = TokenIssuer::from_env()?;

        let users = UsersRepository::new(&store);
        let tasks = TasksRepository::new(&store);
        let purchases = PurchasesRepository::new(&store);
        let submissions = SubmissionsRepository::new(&store);

        Ok(Self {
            config,
            store: Arc::new(store),
            users,
            tasks,
            purchases,
            submissions,
            payments: Arc::new(payments),
            issuer: Arc::new(issuer),
        })
    }
}
