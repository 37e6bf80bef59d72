//! Axum HTTP API server.
//!
//! This crate provides:
//! - The route layer of the marketplace REST API
//! - JWT issuing and cookie-based verification
//! - Request ids, request logging, and CORS

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod validate;

pub use auth::{AuthUser, TokenIssuer};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
