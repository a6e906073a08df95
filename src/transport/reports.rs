use serde::Deserialize;

use super::TransportError;
use crate::domain::{
    BulkId, DeliveryError, DeliveryReport, MessageId, Price, ReportLimit, ReportQuery,
};

/// Infobip endpoint for pulled delivery reports.
pub const REPORTS_PATH: &str = "/sms/1/reports";

#[derive(Debug, Clone, Deserialize)]
struct ReportsJsonResponse {
    #[serde(default)]
    results: Vec<ReportJson>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ReportJson {
    #[serde(default, rename = "messageId")]
    message_id: Option<String>,
    #[serde(default, rename = "bulkId")]
    bulk_id: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    status: Option<ReportStatusJson>,
    #[serde(default, rename = "doneAt")]
    done_at: Option<String>,
    #[serde(default, rename = "sentAt")]
    sent_at: Option<String>,
    #[serde(default)]
    price: Option<PriceJson>,
    #[serde(default)]
    error: Option<DeliveryErrorJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReportStatusJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PriceJson {
    #[serde(default, rename = "pricePerMessage")]
    price_per_message: Option<f64>,
    #[serde(default)]
    currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct DeliveryErrorJson {
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
    #[serde(default)]
    permanent: Option<bool>,
}

impl From<ReportJson> for DeliveryReport {
    fn from(value: ReportJson) -> Self {
        let (status, status_description) = match value.status {
            Some(status) => (status.name, status.description),
            None => (None, None),
        };
        Self {
            message_id: value.message_id,
            bulk_id: value.bulk_id,
            to: value.to,
            status,
            status_description,
            done_at: value.done_at,
            sent_at: value.sent_at,
            price: value.price.map(|price| Price {
                price_per_message: price.price_per_message,
                currency: price.currency,
            }),
            error: value.error.map(|error| DeliveryError {
                group_id: error.group_id,
                group_name: error.group_name,
                id: error.id,
                name: error.name,
                description: error.description,
                permanent: error.permanent,
            }),
        }
    }
}

pub fn encode_report_query(query: &ReportQuery) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    if let Some(bulk_id) = query.bulk_id.as_ref() {
        params.push((BulkId::FIELD.to_owned(), bulk_id.as_str().to_owned()));
    }
    if let Some(message_id) = query.message_id.as_ref() {
        params.push((MessageId::FIELD.to_owned(), message_id.as_str().to_owned()));
    }
    params.push((ReportLimit::FIELD.to_owned(), query.limit.value().to_string()));

    params
}

pub fn decode_delivery_reports_response(json: &str) -> Result<Vec<DeliveryReport>, TransportError> {
    let parsed: ReportsJsonResponse = serde_json::from_str(json)?;
    Ok(parsed.results.into_iter().map(Into::into).collect())
}
