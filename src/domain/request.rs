use crate::domain::value::{BulkId, MessageId, MessageText, PhoneNumber, ReportLimit, SenderId};

#[derive(Debug, Clone)]
/// A single-destination outbound SMS.
pub struct SendSms {
    to: PhoneNumber,
    text: MessageText,
    from: SenderId,
}

impl SendSms {
    /// Build a send request. A missing `from` falls back to
    /// [`SenderId::DEFAULT`].
    pub fn new(to: PhoneNumber, text: MessageText, from: Option<SenderId>) -> Self {
        Self {
            to,
            text,
            from: from.unwrap_or_default(),
        }
    }

    pub fn to(&self) -> &PhoneNumber {
        &self.to
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn from(&self) -> &SenderId {
        &self.from
    }
}

#[derive(Debug, Clone)]
/// A request to preview how a text segments into billable parts.
pub struct PreviewSms {
    text: MessageText,
}

impl PreviewSms {
    pub fn new(text: MessageText) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }
}

#[derive(Debug, Clone, Default)]
/// Filters for the delivery-report listing. All filters are optional; the
/// limit defaults to [`ReportLimit::DEFAULT`].
pub struct ReportQuery {
    pub bulk_id: Option<BulkId>,
    pub message_id: Option<MessageId>,
    pub limit: ReportLimit,
}
