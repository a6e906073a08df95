use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::AppEnv;
use crate::domain::{
    BulkId, MessageId, MessageText, PhoneNumber, PreviewSms, ReportLimit, ReportQuery, SendSms,
    SenderId,
};
use crate::service::{Envelope, SmsService};

/// Shared state for all entry points. `service` is `None` when the gateway
/// started without an API key; every request then short-circuits with a
/// configuration failure.
pub struct AppState {
    pub service: Option<SmsService>,
    pub env: AppEnv,
}

#[derive(Debug, Default, Deserialize)]
struct SendBody {
    to: Option<String>,
    message: Option<String>,
    from: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PreviewBody {
    message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportParams {
    bulk_id: Option<String>,
    message_id: Option<String>,
    limit: Option<String>,
}

/// Preflight response for every route.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn send_sms(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let Some(service) = state.service.as_ref() else {
        return unconfigured();
    };

    // Malformed JSON degrades to an all-empty body and fails the
    // required-field check below.
    let body: SendBody = serde_json::from_slice(&body).unwrap_or_default();
    let (Some(to), Some(message)) = (body.to, body.message) else {
        return bad_request("Missing required fields: to, message");
    };

    let Ok(to) = PhoneNumber::new(to) else {
        return bad_request("Invalid phone number format");
    };
    let text = match MessageText::new(message) {
        Ok(text) => text,
        Err(err) => return bad_request(&err.to_string()),
    };
    let from = body.from.and_then(|value| SenderId::new(value).ok());

    let request = SendSms::new(to, text, from);
    envelope_response(state.env, service.send_sms(&request).await)
}

pub async fn preview_sms(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let Some(service) = state.service.as_ref() else {
        return unconfigured();
    };

    let body: PreviewBody = serde_json::from_slice(&body).unwrap_or_default();
    let Some(message) = body.message else {
        return bad_request("Missing required field: message");
    };
    let text = match MessageText::new(message) {
        Ok(text) => text,
        Err(err) => return bad_request(&err.to_string()),
    };

    let request = PreviewSms::new(text);
    envelope_response(state.env, service.preview_sms(&request).await)
}

pub async fn delivery_reports(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportParams>,
) -> Response {
    let Some(service) = state.service.as_ref() else {
        return unconfigured();
    };

    let query = ReportQuery {
        bulk_id: params.bulk_id.and_then(|value| BulkId::new(value).ok()),
        message_id: params
            .message_id
            .and_then(|value| MessageId::new(value).ok()),
        // Non-numeric limits fall back to the default.
        limit: params
            .limit
            .as_deref()
            .and_then(|value| value.parse::<u32>().ok())
            .map(ReportLimit::new)
            .unwrap_or_default(),
    };

    envelope_response(state.env, service.delivery_reports(&query).await)
}

pub async fn inbound_webhook(State(state): State<Arc<AppState>>, body: String) -> Response {
    let Some(service) = state.service.as_ref() else {
        return unconfigured();
    };
    envelope_response(state.env, service.process_inbound_sms(&body))
}

pub async fn delivery_webhook(State(state): State<Arc<AppState>>, body: String) -> Response {
    let Some(service) = state.service.as_ref() else {
        return unconfigured();
    };
    envelope_response(state.env, service.process_delivery_report(&body))
}

/// HTTP status comes from the envelope's `success` flag; production mode
/// strips raw vendor detail before emission.
fn envelope_response<T: Serialize>(env: AppEnv, envelope: Envelope<T>) -> Response {
    let envelope = if env.verbose_errors() {
        envelope
    } else {
        envelope.without_details()
    };
    let status = if envelope.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(envelope)).into_response()
}

fn bad_request(error: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": error }))).into_response()
}

fn unconfigured() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "API key not configured" })),
    )
        .into_response()
}
