use serde::Serialize;

/// Payload of a successful send: what the gateway reports back to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendData {
    pub bulk_id: Option<String>,
    pub message_count: usize,
    pub messages: Vec<SentMessage>,
}

/// Per-message entry of a send response, passed through from the vendor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentMessage {
    pub to: Option<String>,
    pub message_id: Option<String>,
    pub status: Option<MessageStatus>,
}

/// Vendor status object attached to sent messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStatus {
    pub group_id: Option<i32>,
    pub group_name: Option<String>,
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// One preview of how a text segments into billable parts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewEntry {
    pub characters_remaining: i32,
    pub text_preview: String,
    /// Derived: `charactersRemaining + length(textPreview)`. The vendor does
    /// not return this directly.
    pub character_count: i32,
    pub message_count: i32,
}

impl PreviewEntry {
    /// Build an entry from vendor fields, reconstructing `characterCount`.
    pub fn from_vendor(characters_remaining: i32, text_preview: String, message_count: i32) -> Self {
        let character_count = characters_remaining + text_preview.chars().count() as i32;
        Self {
            characters_remaining,
            text_preview,
            character_count,
            message_count,
        }
    }
}

/// Status record for a previously sent message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryReport {
    pub message_id: Option<String>,
    pub bulk_id: Option<String>,
    pub to: Option<String>,
    /// Name of the vendor's nested status object.
    pub status: Option<String>,
    /// Description of the vendor's nested status object.
    pub status_description: Option<String>,
    pub done_at: Option<String>,
    pub sent_at: Option<String>,
    pub price: Option<Price>,
    pub error: Option<DeliveryError>,
}

/// Vendor price object, passed through unmodified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub price_per_message: Option<f64>,
    pub currency: Option<String>,
}

/// Vendor error object attached to failed deliveries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryError {
    pub group_id: Option<i32>,
    pub group_name: Option<String>,
    pub id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub permanent: Option<bool>,
}

/// One message received through the inbound-SMS webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessage {
    pub message_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub text: Option<String>,
    pub clean_text: Option<String>,
    pub keyword: Option<String>,
    pub received_at: Option<String>,
    pub sms_count: Option<i32>,
    pub price: Option<Price>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_entry_reconstructs_character_count() {
        let entry = PreviewEntry::from_vendor(10, "hello".to_owned(), 1);
        assert_eq!(entry.character_count, 15);
        assert_eq!(entry.characters_remaining, 10);
        assert_eq!(entry.text_preview, "hello");
        assert_eq!(entry.message_count, 1);
    }

    #[test]
    fn preview_entry_counts_characters_not_bytes() {
        let entry = PreviewEntry::from_vendor(3, "héllo".to_owned(), 1);
        assert_eq!(entry.character_count, 8);
    }

    #[test]
    fn records_serialize_with_camel_case_keys() {
        let report = DeliveryReport {
            message_id: Some("msg-1".to_owned()),
            bulk_id: Some("bulk-1".to_owned()),
            to: Some("+1234567890".to_owned()),
            status: Some("DELIVERED_TO_HANDSET".to_owned()),
            status_description: Some("Message delivered to handset".to_owned()),
            done_at: Some("2019-11-09T16:00:00.000+0000".to_owned()),
            sent_at: Some("2019-11-09T15:59:00.000+0000".to_owned()),
            price: Some(Price {
                price_per_message: Some(0.01),
                currency: Some("EUR".to_owned()),
            }),
            error: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["messageId"], "msg-1");
        assert_eq!(json["statusDescription"], "Message delivered to handset");
        assert_eq!(json["price"]["pricePerMessage"], 0.01);
        assert!(json["error"].is_null());
    }
}
