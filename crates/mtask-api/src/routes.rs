//! API routes.

use axum::middleware;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::health::liveness;
use crate::handlers::payments::create_payment_intent;
use crate::handlers::purchases::{create_purchase, list_purchases, list_purchases_by_email};
use crate::handlers::submissions::{
    create_submission, delete_submission, list_submissions, list_submissions_by_worker,
    update_submission_status,
};
use crate::handlers::tasks::{
    create_task, get_task, list_tasks, list_tasks_by_provider, update_task,
};
use crate::handlers::token::issue_token;
use crate::handlers::users::{
    create_user, get_user_by_email, list_users, update_user_coin, update_user_role,
};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
///
/// Paths and methods preserve the original wire contract exactly.
pub fn create_router(state: AppState) -> Router {
    let token_routes = Router::new().route("/jwt", post(issue_token));

    let payment_routes =
        Router::new().route("/create-payment-intent", post(create_payment_intent));

    let purchase_routes = Router::new()
        .route("/purchase-coin", post(create_purchase).get(list_purchases))
        .route("/purchase-coin/:email", get(list_purchases_by_email));

    let user_routes = Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/user/:email", get(get_user_by_email).patch(update_user_coin))
        .route("/user/role/:email", patch(update_user_role));

    let task_routes = Router::new()
        .route("/tasks", post(create_task).get(list_tasks))
        .route("/tasks/:email", get(list_tasks_by_provider))
        .route("/task/:id", get(get_task).patch(update_task));

    let submission_routes = Router::new()
        .route(
            "/submissions",
            post(create_submission).get(list_submissions),
        )
        .route("/submissions/:email", get(list_submissions_by_worker))
        .route(
            "/submission/:id",
            patch(update_submission_status).delete(delete_submission),
        );

    Router::new()
        .route("/", get(liveness))
        .merge(token_routes)
        .merge(payment_routes)
        .merge(purchase_routes)
        .merge(user_routes)
        .merge(task_routes)
        .merge(submission_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
