//! Extension seams invoked after a successful parse
//!
//! Signature verification, durable storage, and downstream notification are
//! not implemented behavior; they exist as collaborator traits so a
//! deployment can wire real implementations in without touching the
//! handler. The shipped implementations are explicit no-ops, and the
//! handler never lets a collaborator outcome alter the acknowledgment.

use async_trait::async_trait;
use axum::http::HeaderMap;
use thiserror::Error;

use crate::domain::entities::WebhookPayload;

#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Signature verification failed: {0}")]
    Verification(String),

    #[error("Storage failed: {0}")]
    Storage(String),

    #[error("Notification failed: {0}")]
    Notification(String),
}

/// Verifies the authenticity of an incoming webhook request
#[async_trait]
pub trait SignatureVerifier: Send + Sync {
    async fn verify(&self, headers: &HeaderMap, body: &str) -> Result<(), CollaboratorError>;
}

/// Records a received payload durably
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn record(&self, payload: &WebhookPayload) -> Result<(), CollaboratorError>;
}

/// Notifies downstream consumers of a received payload
#[async_trait]
pub trait EventNotifier: Send + Sync {
    async fn notify(&self, payload: &WebhookPayload) -> Result<(), CollaboratorError>;
}

/// Accepts every request without inspecting it
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVerifier;

#[async_trait]
impl SignatureVerifier for NoopVerifier {
    async fn verify(&self, _headers: &HeaderMap, _body: &str) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Drops every payload
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

#[async_trait]
impl EventStore for NoopStore {
    async fn record(&self, _payload: &WebhookPayload) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Notifies nobody
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl EventNotifier for NoopNotifier {
    async fn notify(&self, _payload: &WebhookPayload) -> Result<(), CollaboratorError> {
        Ok(())
    }
}
