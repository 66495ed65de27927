//! Webhooks domain: spreadsheet webhook payloads, acknowledgments, extension seams

pub mod api;
pub mod collaborators;
pub mod domain;

// Re-export domain types at the crate root for convenience
pub use collaborators::{
    CollaboratorError, EventNotifier, EventStore, NoopNotifier, NoopStore, NoopVerifier,
    SignatureVerifier,
};
pub use domain::entities::{ReceivedData, WebhookAck, WebhookPayload};

// Re-export API types
pub use api::routes;
pub use api::WebhooksState;
