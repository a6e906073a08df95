use serde::Deserialize;
use serde_json::json;

use super::TransportError;
use crate::domain::{MessageStatus, SendData, SendSms, SentMessage};

/// Infobip endpoint for single/batch text messages.
pub const SEND_PATH: &str = "/sms/2/text/advanced";

#[derive(Debug, Clone, Deserialize)]
struct SendJsonResponse {
    #[serde(default, rename = "bulkId")]
    bulk_id: Option<String>,
    #[serde(default)]
    messages: Vec<SentMessageJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct SentMessageJson {
    #[serde(default)]
    to: Option<String>,
    #[serde(default, rename = "messageId")]
    message_id: Option<String>,
    #[serde(default)]
    status: Option<MessageStatusJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageStatusJson {
    #[serde(default, rename = "groupId")]
    group_id: Option<i32>,
    #[serde(default, rename = "groupName")]
    group_name: Option<String>,
    #[serde(default)]
    id: Option<i32>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl From<MessageStatusJson> for MessageStatus {
    fn from(value: MessageStatusJson) -> Self {
        Self {
            group_id: value.group_id,
            group_name: value.group_name,
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}

pub fn encode_send_sms_body(request: &SendSms) -> serde_json::Value {
    json!({
        "messages": [{
            "destinations": [{ "to": request.to().as_str() }],
            "from": request.from().as_str(),
            "text": request.text().as_str(),
        }]
    })
}

pub fn decode_send_sms_response(json: &str) -> Result<SendData, TransportError> {
    let parsed: SendJsonResponse = serde_json::from_str(json)?;

    let messages = parsed
        .messages
        .into_iter()
        .map(|message| SentMessage {
            to: message.to,
            message_id: message.message_id,
            status: message.status.map(Into::into),
        })
        .collect::<Vec<_>>();

    Ok(SendData {
        bulk_id: parsed.bulk_id,
        message_count: messages.len(),
        messages,
    })
}
