//! Webhooks domain state

use std::sync::Arc;

use crate::collaborators::{
    EventNotifier, EventStore, NoopNotifier, NoopStore, NoopVerifier, SignatureVerifier,
};

/// Application state for the Webhooks domain
///
/// Holds only the optional extension collaborators; the handler itself is
/// stateless. Clones share the same collaborators via `Arc`.
#[derive(Clone)]
pub struct WebhooksState {
    pub verifier: Arc<dyn SignatureVerifier>,
    pub store: Arc<dyn EventStore>,
    pub notifier: Arc<dyn EventNotifier>,
}

impl Default for WebhooksState {
    fn default() -> Self {
        WebhooksState {
            verifier: Arc::new(NoopVerifier),
            store: Arc::new(NoopStore),
            notifier: Arc::new(NoopNotifier),
        }
    }
}
