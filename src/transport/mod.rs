//! Transport layer: Infobip wire-format details (serialization/deserialization).

mod preview;
mod reports;
mod send;
mod webhook;

pub use preview::{PREVIEW_PATH, decode_preview_sms_response, encode_preview_sms_body};
pub use reports::{REPORTS_PATH, decode_delivery_reports_response, encode_report_query};
pub use send::{SEND_PATH, decode_send_sms_response, encode_send_sms_body};
pub use webhook::{decode_delivery_report_payload, decode_inbound_sms_payload};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}
