use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Infobip API key, sent as `Authorization: App <key>`.
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Authorization scheme used by Infobip.
    pub const SCHEME: &'static str = "App";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "api key" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full value of the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", Self::SCHEME, self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Destination phone number (`to`).
///
/// Invariant: after trimming, matches the loose E.164 pattern
/// `^\+?[1-9]\d{1,14}$` (optional `+`, then 2 to 15 digits, first digit
/// non-zero). No normalization beyond trimming is performed.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// JSON field name used by the gateway (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated [`PhoneNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !Self::matches_loose_e164(trimmed) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated number as provided (leading `+` preserved).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn matches_loose_e164(value: &str) -> bool {
        let digits = value.strip_prefix('+').unwrap_or(value);
        let mut chars = digits.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !first.is_ascii_digit() || first == '0' {
            return false;
        }
        let rest = chars.as_str();
        if !rest.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        (1..=14).contains(&rest.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including
/// whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by the gateway (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id (`from`).
///
/// Invariant: non-empty after trimming. The value must be enabled for your
/// Infobip account.
pub struct SenderId(String);

impl SenderId {
    /// JSON field name used by the gateway (`from`).
    pub const FIELD: &'static str = "from";

    /// Sender used when the caller does not supply one.
    pub const DEFAULT: &'static str = "InfoSMS";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SenderId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Bulk id assigned by Infobip to one send request (`bulkId`).
///
/// Invariant: non-empty after trimming.
pub struct BulkId(String);

impl BulkId {
    /// Query field name used by the gateway (`bulkId`).
    pub const FIELD: &'static str = "bulkId";

    /// Create a validated [`BulkId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated bulk id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id assigned by Infobip to a single message (`messageId`).
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    /// Query field name used by the gateway (`messageId`).
    pub const FIELD: &'static str = "messageId";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated message id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Maximum number of delivery reports to fetch (`limit`).
pub struct ReportLimit(u32);

impl ReportLimit {
    /// Query field name used by the gateway (`limit`).
    pub const FIELD: &'static str = "limit";

    /// Limit applied when the caller does not supply one.
    pub const DEFAULT: u32 = 10;

    /// Create a limit value (no range validation is performed).
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying limit.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for ReportLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_trims_and_rejects_empty() {
        let key = ApiKey::new("  secret ").unwrap();
        assert_eq!(key.as_str(), "secret");
        assert_eq!(key.authorization_header(), "App secret");
        assert!(ApiKey::new("   ").is_err());
    }

    #[test]
    fn phone_number_accepts_loose_e164() {
        for input in [
            "+1234567890",
            "1234567890",
            "+998901234567",
            "12",
            "+123456789012345",
        ] {
            assert!(PhoneNumber::new(input).is_ok(), "rejected {input}");
        }
    }

    #[test]
    fn phone_number_rejects_everything_else() {
        for input in [
            "not-a-number",
            "+0123456789",
            "0123456789",
            "+1",
            "1",
            "+1234567890123456",
            "+12 34",
            "12a34",
            "++1234",
            "",
        ] {
            assert!(PhoneNumber::new(input).is_err(), "accepted {input}");
        }
    }

    #[test]
    fn phone_number_trims_surrounding_whitespace() {
        let phone = PhoneNumber::new(" +1234567890 ").unwrap();
        assert_eq!(phone.as_str(), "+1234567890");
    }

    #[test]
    fn message_text_preserves_whitespace_but_rejects_blank() {
        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());
    }

    #[test]
    fn sender_id_defaults_to_infosms() {
        assert_eq!(SenderId::default().as_str(), "InfoSMS");
        let sender = SenderId::new(" MyBrand ").unwrap();
        assert_eq!(sender.as_str(), "MyBrand");
        assert!(SenderId::new("").is_err());
    }

    #[test]
    fn ids_trim_and_reject_empty() {
        let bulk = BulkId::new(" bulk-1 ").unwrap();
        assert_eq!(bulk.as_str(), "bulk-1");
        assert!(BulkId::new("  ").is_err());

        let message = MessageId::new(" msg-1 ").unwrap();
        assert_eq!(message.as_str(), "msg-1");
        assert!(MessageId::new("  ").is_err());
    }

    #[test]
    fn report_limit_defaults_to_ten() {
        assert_eq!(ReportLimit::default().value(), ReportLimit::DEFAULT);
        assert_eq!(ReportLimit::new(5).value(), 5);
    }
}
