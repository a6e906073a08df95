//! HTTP JSON gateway in front of the Infobip SMS API.
//!
//! The design is layered: a domain layer of strong types, a transport layer
//! for wire-format details, a small client layer orchestrating vendor
//! round-trips, a service layer mapping every outcome into a uniform
//! `{success, data|error}` envelope, and axum entry points on top.
//!
//! ```rust,no_run
//! use smsgate::{ApiKey, InfobipClient, MessageText, PhoneNumber, SendSms, SmsService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsgate::InfobipError> {
//!     let client = InfobipClient::new(ApiKey::new("...")?);
//!     let service = SmsService::new(client);
//!
//!     let request = SendSms::new(
//!         PhoneNumber::new("+1234567890")?,
//!         MessageText::new("hello")?,
//!         None,
//!     );
//!     let envelope = service.send_sms(&request).await;
//!     println!("success: {}, bulk id: {:?}", envelope.success, envelope.data);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
pub mod http;
pub mod service;
mod transport;

pub use client::{DEFAULT_BASE_URL, InfobipClient, InfobipClientBuilder, InfobipError};
pub use config::{AppEnv, ConfigError, GatewayConfig};
pub use domain::{
    ApiKey, BulkId, DeliveryError, DeliveryReport, InboundMessage, MessageId, MessageStatus,
    MessageText, PhoneNumber, PreviewEntry, PreviewSms, Price, ReportLimit, ReportQuery, SendData,
    SendSms, SenderId, SentMessage, ValidationError,
};
pub use service::{Envelope, ErrorDetails, SmsService};
