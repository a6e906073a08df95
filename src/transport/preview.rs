use serde::Deserialize;
use serde_json::json;

use super::TransportError;
use crate::domain::{PreviewEntry, PreviewSms};

/// Infobip endpoint for message previews.
pub const PREVIEW_PATH: &str = "/sms/1/preview";

#[derive(Debug, Clone, Deserialize)]
struct PreviewJsonResponse {
    #[serde(default)]
    previews: Vec<PreviewJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct PreviewJson {
    #[serde(default, rename = "charactersRemaining")]
    characters_remaining: i32,
    #[serde(default, rename = "textPreview")]
    text_preview: String,
    #[serde(default, rename = "messageCount")]
    message_count: i32,
}

pub fn encode_preview_sms_body(request: &PreviewSms) -> serde_json::Value {
    json!({ "text": request.text().as_str() })
}

pub fn decode_preview_sms_response(json: &str) -> Result<Vec<PreviewEntry>, TransportError> {
    let parsed: PreviewJsonResponse = serde_json::from_str(json)?;

    Ok(parsed
        .previews
        .into_iter()
        .map(|preview| {
            PreviewEntry::from_vendor(
                preview.characters_remaining,
                preview.text_preview,
                preview.message_count,
            )
        })
        .collect())
}
