//! Spreadsheet webhook receive handler

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info, warn};

use sheethook_common::{Error, Result};

use crate::api::middleware::WebhooksState;
use crate::domain::entities::{WebhookAck, WebhookPayload};

/// Handle a webhook callback from the spreadsheet data source
///
/// Contract: only `POST` is accepted (405 otherwise); the body must be
/// valid JSON (500 otherwise); a successfully parsed payload is
/// acknowledged with 200 and an echo of the recognized fields. The
/// collaborators run after the parse and never alter the acknowledgment.
pub async fn receive_webhook(
    State(state): State<WebhooksState>,
    method: Method,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse> {
    debug!(%method, ?headers, "incoming webhook request");

    // Only accept POST requests
    if method != Method::POST {
        return Err(Error::MethodNotAllowed);
    }

    let payload = WebhookPayload::parse(&body)?;

    info!(
        event_type = ?payload.event_type,
        sheet = ?payload.sheet,
        "webhook payload received"
    );

    // Extension seams: verification, storage, and notification are not
    // implemented behavior. Their outcome is logged, nothing more.
    if let Err(e) = state.verifier.verify(&headers, &body).await {
        warn!(error = %e, "webhook signature verification did not pass");
    }
    if let Err(e) = state.store.record(&payload).await {
        warn!(error = %e, "webhook payload could not be recorded");
    }
    if let Err(e) = state.notifier.notify(&payload).await {
        warn!(error = %e, "webhook notification could not be delivered");
    }

    let ack = WebhookAck::new(&payload);
    debug!(?ack, "acknowledging webhook");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
        ],
        Json(ack),
    ))
}
