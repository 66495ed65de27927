use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use sheethook_common::Result;

/// Webhook payload decoded from the raw request body
///
/// The contract is open-ended: any syntactically valid JSON document is
/// accepted, object or not. The recognized fields are lifted out when the
/// document is an object; values pass through unvalidated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WebhookPayload {
    /// The `type` field of the payload, if present
    pub event_type: Option<Value>,
    /// The `sheet` field of the payload, if present
    pub sheet: Option<Value>,
    /// The `timestamp` field of the payload, if present
    pub timestamp: Option<Value>,
    /// The `user` field of the payload, if present
    pub user: Option<Value>,
    /// The full decoded document
    pub raw: Value,
}

impl WebhookPayload {
    /// Decode a payload from a raw request body
    ///
    /// Fails only when the body is not valid JSON.
    pub fn parse(body: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(raw))
    }

    /// Build a payload from an already-decoded JSON document
    ///
    /// Non-object documents are accepted; none of the recognized fields
    /// resolve for them.
    pub fn from_value(raw: Value) -> Self {
        WebhookPayload {
            event_type: raw.get("type").cloned(),
            sheet: raw.get("sheet").cloned(),
            timestamp: raw.get("timestamp").cloned(),
            user: raw.get("user").cloned(),
            raw,
        }
    }

    /// The echo of the recognized fields returned in the acknowledgment
    pub fn echo(&self) -> ReceivedData {
        ReceivedData {
            event_type: self.event_type.clone().unwrap_or(Value::Null),
            sheet: self.sheet.clone().unwrap_or(Value::Null),
            timestamp: self.timestamp.clone().unwrap_or(Value::Null),
        }
    }
}

/// Echoed payload fields in the acknowledgment body
///
/// Absent fields serialize as explicit `null`s so callers see a stable
/// shape regardless of what the payload carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceivedData {
    #[serde(rename = "type")]
    pub event_type: Value,
    pub sheet: Value,
    pub timestamp: Value,
}

/// Acknowledgment body for a successfully received webhook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAck {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub received_data: ReceivedData,
}

impl WebhookAck {
    /// Acknowledge a received payload, stamped with the current time
    pub fn new(payload: &WebhookPayload) -> Self {
        WebhookAck {
            success: true,
            message: "Webhook received successfully".to_string(),
            timestamp: Utc::now(),
            received_data: payload.echo(),
        }
    }
}
