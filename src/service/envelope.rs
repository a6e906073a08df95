use std::collections::BTreeMap;

use serde::Serialize;

/// Vendor error detail carried by failure envelopes: the HTTP status code
/// plus the raw response body and headers as Infobip returned them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub code: u16,
    pub response_body: String,
    pub response_headers: BTreeMap<String, String>,
}

impl ErrorDetails {
    pub fn new(code: u16, response_body: String, response_headers: Vec<(String, String)>) -> Self {
        Self {
            code,
            response_body,
            response_headers: response_headers.into_iter().collect(),
        }
    }
}

/// The uniform result wrapper returned by every gateway operation.
///
/// Exactly one of `data` / `error` is present, keyed by `success`. The shape
/// never varies across operations; only the `data` payload type does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(data)
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(error.into()),
            details: None,
        }
    }

    pub fn failure_with_details(error: impl Into<String>, details: ErrorDetails) -> Self {
        Self {
            details: Some(details),
            ..Self::failure(error)
        }
    }

    /// Drop raw vendor detail, keeping the human-readable error. Used when
    /// the gateway runs in production mode.
    pub fn without_details(mut self) -> Self {
        self.details = None;
        self
    }
}
