use serde::Deserialize;

use super::TransportError;
use super::reports::ReportJson;
use crate::domain::{DeliveryReport, InboundMessage, Price};

#[derive(Debug, Clone, Deserialize)]
struct InboundJsonPayload {
    #[serde(default)]
    results: Vec<InboundMessageJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct InboundMessageJson {
    #[serde(default, rename = "messageId")]
    message_id: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default, rename = "cleanText")]
    clean_text: Option<String>,
    #[serde(default)]
    keyword: Option<String>,
    #[serde(default, rename = "receivedAt")]
    received_at: Option<String>,
    #[serde(default, rename = "smsCount")]
    sms_count: Option<i32>,
    #[serde(default)]
    price: Option<InboundPriceJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct InboundPriceJson {
    #[serde(default, rename = "pricePerMessage")]
    price_per_message: Option<f64>,
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct DeliveryJsonPayload {
    #[serde(default)]
    results: Vec<ReportJson>,
}

/// Decode the payload Infobip POSTs for received messages.
pub fn decode_inbound_sms_payload(raw: &str) -> Result<Vec<InboundMessage>, TransportError> {
    let parsed: InboundJsonPayload = serde_json::from_str(raw)?;

    Ok(parsed
        .results
        .into_iter()
        .map(|message| InboundMessage {
            message_id: message.message_id,
            from: message.from,
            to: message.to,
            text: message.text,
            clean_text: message.clean_text,
            keyword: message.keyword,
            received_at: message.received_at,
            sms_count: message.sms_count,
            price: message.price.map(|price| Price {
                price_per_message: price.price_per_message,
                currency: price.currency,
            }),
        })
        .collect())
}

/// Decode the payload Infobip POSTs for delivery reports. Same record shape
/// as the pulled reports endpoint.
pub fn decode_delivery_report_payload(raw: &str) -> Result<Vec<DeliveryReport>, TransportError> {
    let parsed: DeliveryJsonPayload = serde_json::from_str(raw)?;
    Ok(parsed.results.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_payload_maps_every_field() {
        let raw = r#"
        {
          "results": [
            {
              "messageId": "817790313235066447",
              "from": "+385916242493",
              "to": "+385921004026",
              "text": "KEYWORD Test message",
              "cleanText": "Test message",
              "keyword": "KEYWORD",
              "receivedAt": "2019-11-09T16:00:00.000+0000",
              "smsCount": 1,
              "price": { "pricePerMessage": 0, "currency": "EUR" }
            }
          ],
          "messageCount": 1,
          "pendingMessageCount": 0
        }
        "#;

        let messages = decode_inbound_sms_payload(raw).unwrap();
        assert_eq!(messages.len(), 1);

        let message = &messages[0];
        assert_eq!(message.message_id.as_deref(), Some("817790313235066447"));
        assert_eq!(message.from.as_deref(), Some("+385916242493"));
        assert_eq!(message.clean_text.as_deref(), Some("Test message"));
        assert_eq!(message.keyword.as_deref(), Some("KEYWORD"));
        assert_eq!(message.sms_count, Some(1));
        assert_eq!(message.price.as_ref().unwrap().currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn delivery_payload_shares_the_report_record_shape() {
        let raw = r#"
        {
          "results": [
            {
              "bulkId": "bulk-1",
              "messageId": "msg-1",
              "to": "+1234567890",
              "status": { "name": "DELIVERED_TO_HANDSET", "description": "Delivered" }
            }
          ]
        }
        "#;

        let reports = decode_delivery_report_payload(raw).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].status.as_deref(), Some("DELIVERED_TO_HANDSET"));
        assert_eq!(reports[0].status_description.as_deref(), Some("Delivered"));
    }

    #[test]
    fn empty_results_decode_to_empty_lists() {
        assert!(decode_inbound_sms_payload("{}").unwrap().is_empty());
        assert!(decode_delivery_report_payload("{}").unwrap().is_empty());
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        assert!(matches!(
            decode_inbound_sms_payload("<xml/>"),
            Err(TransportError::Json(_))
        ));
        assert!(matches!(
            decode_delivery_report_payload(""),
            Err(TransportError::Json(_))
        ));
    }
}
