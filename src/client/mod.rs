//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ApiKey, DeliveryReport, PreviewEntry, PreviewSms, ReportQuery, SendData, SendSms,
    ValidationError,
};
use crate::transport::{
    PREVIEW_PATH, REPORTS_PATH, SEND_PATH, decode_delivery_reports_response,
    decode_preview_sms_response, decode_send_sms_response, encode_preview_sms_body,
    encode_report_query, encode_send_sms_body,
};

/// Infobip production endpoint, used when no base URL override is given.
pub const DEFAULT_BASE_URL: &str = "https://api.infobip.com";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
    pub(crate) headers: Vec<(String, String)>,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;

    fn get<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    async fn capture(
        response: reqwest::Response,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_owned(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;
        Ok(HttpResponse {
            status,
            body,
            headers,
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header("Authorization", authorization)
                .json(&body)
                .send()
                .await?;
            Self::capture(response).await
        })
    }

    fn get<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        query: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .header("Authorization", authorization)
                .query(&query)
                .send()
                .await?;
            Self::capture(response).await
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`InfobipClient`].
///
/// This error preserves:
/// - HTTP-level failures (DNS, TLS, timeouts),
/// - API-level failures (non-2xx vendor status, with body and headers),
/// - validation/parse failures.
pub enum InfobipError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Infobip answered with a non-2xx status. The raw response body and
    /// headers are preserved for error reporting.
    #[error("API error: HTTP {status}")]
    Api {
        status: u16,
        body: String,
        headers: Vec<(String, String)>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`InfobipClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct InfobipClientBuilder {
    api_key: ApiKey,
    base_url: Url,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl InfobipClientBuilder {
    /// Create a builder with the production base URL and no timeout or
    /// user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: default_base_url(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the Infobip base URL.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`InfobipClient`].
    pub fn build(self) -> Result<InfobipClient, InfobipError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| InfobipError::Transport(Box::new(err)))?;

        Ok(InfobipClient {
            api_key: self.api_key,
            base_url: self.base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Infobip SMS client.
///
/// This type orchestrates request encoding, the HTTP round-trip, and
/// response decoding for the three pull-style operations the gateway uses:
/// sending, previewing, and listing delivery reports. Each call performs
/// exactly one vendor round-trip; nothing is retried.
pub struct InfobipClient {
    api_key: ApiKey,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl InfobipClient {
    /// Create a client against [`DEFAULT_BASE_URL`].
    ///
    /// For more customization, use [`InfobipClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: default_base_url(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> InfobipClientBuilder {
        InfobipClientBuilder::new(api_key)
    }

    #[cfg(test)]
    pub(crate) fn with_transport(
        api_key: ApiKey,
        base_url: Url,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            api_key,
            base_url,
            http,
        }
    }

    /// Send one SMS message through Infobip.
    pub async fn send_sms(&self, request: &SendSms) -> Result<SendData, InfobipError> {
        let url = self.endpoint(SEND_PATH)?;
        let response = self
            .http
            .post_json(
                url.as_str(),
                &self.api_key.authorization_header(),
                encode_send_sms_body(request),
            )
            .await
            .map_err(InfobipError::Transport)?;

        let body = Self::require_success(response)?;
        decode_send_sms_response(&body).map_err(|err| InfobipError::Parse(Box::new(err)))
    }

    /// Preview how a message text segments into billable parts.
    pub async fn preview_sms(
        &self,
        request: &PreviewSms,
    ) -> Result<Vec<PreviewEntry>, InfobipError> {
        let url = self.endpoint(PREVIEW_PATH)?;
        let response = self
            .http
            .post_json(
                url.as_str(),
                &self.api_key.authorization_header(),
                encode_preview_sms_body(request),
            )
            .await
            .map_err(InfobipError::Transport)?;

        let body = Self::require_success(response)?;
        decode_preview_sms_response(&body).map_err(|err| InfobipError::Parse(Box::new(err)))
    }

    /// Fetch delivery reports for previously sent messages.
    pub async fn delivery_reports(
        &self,
        query: &ReportQuery,
    ) -> Result<Vec<DeliveryReport>, InfobipError> {
        let url = self.endpoint(REPORTS_PATH)?;
        let response = self
            .http
            .get(
                url.as_str(),
                &self.api_key.authorization_header(),
                encode_report_query(query),
            )
            .await
            .map_err(InfobipError::Transport)?;

        let body = Self::require_success(response)?;
        decode_delivery_reports_response(&body).map_err(|err| InfobipError::Parse(Box::new(err)))
    }

    fn endpoint(&self, path: &str) -> Result<Url, InfobipError> {
        self.base_url
            .join(path)
            .map_err(|err| InfobipError::Transport(Box::new(err)))
    }

    fn require_success(response: HttpResponse) -> Result<String, InfobipError> {
        if !(200..=299).contains(&response.status) {
            return Err(InfobipError::Api {
                status: response.status,
                body: response.body,
                headers: response.headers,
            });
        }
        Ok(response.body)
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL must parse")
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, Default)]
    pub(crate) struct RecordedRequest {
        pub(crate) url: Option<String>,
        pub(crate) authorization: Option<String>,
        pub(crate) body: Option<serde_json::Value>,
        pub(crate) query: Vec<(String, String)>,
    }

    /// Canned-response transport recording the last request it saw.
    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        last: RecordedRequest,
        response_status: u16,
        response_body: String,
        response_headers: Vec<(String, String)>,
        fail_with: Option<String>,
    }

    impl FakeTransport {
        pub(crate) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    last: RecordedRequest::default(),
                    response_status,
                    response_body: response_body.into(),
                    response_headers: Vec::new(),
                    fail_with: None,
                })),
            }
        }

        pub(crate) fn with_headers(self, headers: Vec<(String, String)>) -> Self {
            self.state.lock().unwrap().response_headers = headers;
            self
        }

        /// Make every request fail at the transport level with this message.
        pub(crate) fn failing(message: impl Into<String>) -> Self {
            let transport = Self::new(200, "");
            transport.state.lock().unwrap().fail_with = Some(message.into());
            transport
        }

        pub(crate) fn last_request(&self) -> RecordedRequest {
            self.state.lock().unwrap().last.clone()
        }

        fn respond(
            &self,
        ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
            let state = self.state.lock().unwrap();
            if let Some(message) = state.fail_with.as_ref() {
                return Err(message.clone().into());
            }
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
                headers: state.response_headers.clone(),
            })
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            authorization: &'a str,
            body: serde_json::Value,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                {
                    let mut state = self.state.lock().unwrap();
                    state.last = RecordedRequest {
                        url: Some(url.to_owned()),
                        authorization: Some(authorization.to_owned()),
                        body: Some(body),
                        query: Vec::new(),
                    };
                }
                self.respond()
            })
        }

        fn get<'a>(
            &'a self,
            url: &'a str,
            authorization: &'a str,
            query: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                {
                    let mut state = self.state.lock().unwrap();
                    state.last = RecordedRequest {
                        url: Some(url.to_owned()),
                        authorization: Some(authorization.to_owned()),
                        body: None,
                        query,
                    };
                }
                self.respond()
            })
        }
    }

    pub(crate) fn make_client(transport: FakeTransport) -> InfobipClient {
        InfobipClient::with_transport(
            ApiKey::new("test_key").unwrap(),
            Url::parse("https://example.invalid").unwrap(),
            Arc::new(transport),
        )
    }
}
