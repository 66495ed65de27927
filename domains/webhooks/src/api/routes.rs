//! Route definitions for the Webhooks domain API

use axum::{routing::any, Router};

use super::handlers::receive;
use super::middleware::WebhooksState;

/// Create all Webhooks domain API routes
///
/// The webhook route is registered for every method so the handler owns
/// the method check and the 405 body shape.
pub fn routes() -> Router<WebhooksState> {
    Router::new().route("/webhook", any(receive::receive_webhook))
}
