//! Service layer: translates gateway operations into vendor calls and maps
//! every outcome (success or failure) into the uniform [`Envelope`].

mod envelope;

pub use envelope::{Envelope, ErrorDetails};

use log::{info, warn};

use crate::client::{InfobipClient, InfobipError};
use crate::domain::{
    DeliveryReport, InboundMessage, PreviewEntry, PreviewSms, ReportQuery, SendData, SendSms,
};
use crate::transport::{decode_delivery_report_payload, decode_inbound_sms_payload};

/// The translation layer over [`InfobipClient`].
///
/// Every operation returns an [`Envelope`] and never an error: vendor and
/// transport failures are caught here and mapped into failure envelopes, so
/// callers only ever branch on `success`.
pub struct SmsService {
    client: InfobipClient,
}

impl SmsService {
    pub fn new(client: InfobipClient) -> Self {
        Self { client }
    }

    /// Send one SMS message.
    pub async fn send_sms(&self, request: &SendSms) -> Envelope<SendData> {
        info!("sending SMS to {} from {}", request.to().as_str(), request.from().as_str());
        match self.client.send_sms(request).await {
            Ok(data) => {
                info!(
                    "SMS accepted, bulk id {:?}, {} message(s)",
                    data.bulk_id, data.message_count
                );
                Envelope::success_with_message("SMS sent successfully", data)
            }
            Err(err) => vendor_failure("Failed to send SMS", err),
        }
    }

    /// Preview how a message text segments into billable parts.
    pub async fn preview_sms(&self, request: &PreviewSms) -> Envelope<Vec<PreviewEntry>> {
        match self.client.preview_sms(request).await {
            Ok(previews) => Envelope::success(previews),
            Err(err) => vendor_failure("Failed to preview SMS", err),
        }
    }

    /// Fetch delivery reports for previously sent messages.
    pub async fn delivery_reports(&self, query: &ReportQuery) -> Envelope<Vec<DeliveryReport>> {
        match self.client.delivery_reports(query).await {
            Ok(reports) => Envelope::success(reports),
            Err(err) => vendor_failure("Failed to get delivery reports", err),
        }
    }

    /// Process the raw payload of an inbound-SMS webhook.
    pub fn process_inbound_sms(&self, raw: &str) -> Envelope<Vec<InboundMessage>> {
        match decode_inbound_sms_payload(raw) {
            Ok(messages) => {
                info!("processed inbound webhook, {} message(s)", messages.len());
                Envelope::success(messages)
            }
            Err(err) => Envelope::failure(format!("Failed to process incoming SMS: {err}")),
        }
    }

    /// Process the raw payload of a delivery-report webhook.
    pub fn process_delivery_report(&self, raw: &str) -> Envelope<Vec<DeliveryReport>> {
        match decode_delivery_report_payload(raw) {
            Ok(reports) => Envelope::success(reports),
            Err(err) => Envelope::failure(format!("Failed to process delivery report: {err}")),
        }
    }
}

/// Map a client error into a failure envelope.
///
/// The vendor's typed API error keeps its status code, raw body, and raw
/// headers under `details`; anything else (transport, parse) surfaces as an
/// unexpected error with no detail to attach.
fn vendor_failure<T>(prefix: &str, err: InfobipError) -> Envelope<T> {
    let rendered = err.to_string();
    match err {
        InfobipError::Api {
            status,
            body,
            headers,
        } => {
            warn!("{prefix}: vendor returned HTTP {status}");
            Envelope::failure_with_details(
                format!("{prefix}: {rendered}"),
                ErrorDetails::new(status, body, headers),
            )
        }
        _ => {
            warn!("{prefix}: {rendered}");
            Envelope::failure(format!("Unexpected error: {rendered}"))
        }
    }
}
