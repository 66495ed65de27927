//! Sheethook application composition root
//!
//! Composes the webhooks domain router into a single application.

use axum::Router;
use sheethook_webhooks::WebhooksState;

/// Create the main application router with all routes
pub fn create_app() -> Router {
    create_app_with_state(WebhooksState::default())
}

/// Create the application router with explicit collaborator wiring
pub fn create_app_with_state(state: WebhooksState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Sheethook webhook receiver v0.1.0" }),
        )
        .merge(sheethook_webhooks::routes().with_state(state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
