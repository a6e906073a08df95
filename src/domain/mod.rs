//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{PreviewSms, ReportQuery, SendSms};
pub use response::{
    DeliveryError, DeliveryReport, InboundMessage, MessageStatus, PreviewEntry, Price, SendData,
    SentMessage,
};
pub use validation::ValidationError;
pub use value::{ApiKey, BulkId, MessageId, MessageText, PhoneNumber, ReportLimit, SenderId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number_rejects_with_original_input_in_error() {
        assert!(matches!(
            PhoneNumber::new("not-a-number"),
            Err(ValidationError::InvalidPhoneNumber { input }) if input == "not-a-number"
        ));
    }

    #[test]
    fn message_text_rejects_empty() {
        assert!(matches!(
            MessageText::new(""),
            Err(ValidationError::Empty {
                field: MessageText::FIELD
            })
        ));
    }

    #[test]
    fn send_sms_composes_validated_values() {
        let req = SendSms::new(
            PhoneNumber::new("+998901234567").unwrap(),
            MessageText::new("hello").unwrap(),
            None,
        );
        assert_eq!(req.to().as_str(), "+998901234567");
        assert_eq!(req.text().as_str(), "hello");
        assert_eq!(req.from().as_str(), "InfoSMS");
    }

    #[test]
    fn report_query_accepts_partial_filters() {
        let query = ReportQuery {
            bulk_id: Some(BulkId::new("bulk-1").unwrap()),
            message_id: None,
            limit: ReportLimit::new(25),
        };
        assert_eq!(query.bulk_id.as_ref().unwrap().as_str(), "bulk-1");
        assert_eq!(query.limit.value(), 25);
    }
}
