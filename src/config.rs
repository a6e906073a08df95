//! Environment-derived configuration, read once at process start and passed
//! down explicitly. Nothing else in the crate touches the environment.

use url::Url;

use crate::client::DEFAULT_BASE_URL;
use crate::domain::ApiKey;

/// Environment variable holding the Infobip API key (required).
pub const API_KEY_VAR: &str = "INFOBIP_API_KEY";
/// Environment variable overriding the Infobip base URL (optional).
pub const BASE_URL_VAR: &str = "INFOBIP_BASE_URL";
/// Environment variable selecting the runtime environment (optional).
pub const APP_ENV_VAR: &str = "APP_ENV";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("INFOBIP_API_KEY is not set or empty")]
    MissingApiKey,

    #[error("INFOBIP_BASE_URL is not a valid URL: {0}")]
    InvalidBaseUrl(#[source] url::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Runtime environment flag controlling error verbosity.
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    /// Read [`APP_ENV_VAR`]; anything other than `production` is development.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var(APP_ENV_VAR).ok())
    }

    fn from_var(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Whether failure envelopes may carry raw vendor response detail.
    pub fn verbose_errors(self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Debug, Clone)]
/// Gateway configuration: vendor credentials plus the runtime environment.
pub struct GatewayConfig {
    pub api_key: ApiKey,
    pub base_url: Url,
    pub env: AppEnv,
}

impl GatewayConfig {
    /// Read the configuration from the process environment.
    ///
    /// A missing or empty [`API_KEY_VAR`] yields [`ConfigError::MissingApiKey`];
    /// the caller decides whether that is fatal or leaves the gateway
    /// answering every request with a configuration failure.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(BASE_URL_VAR).ok(),
            std::env::var(APP_ENV_VAR).ok(),
        )
    }

    fn from_vars(
        api_key: Option<String>,
        base_url: Option<String>,
        app_env: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .and_then(|value| ApiKey::new(value).ok())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = match base_url.filter(|value| !value.trim().is_empty()) {
            Some(value) => Url::parse(value.trim()).map_err(ConfigError::InvalidBaseUrl)?,
            None => Url::parse(DEFAULT_BASE_URL).map_err(ConfigError::InvalidBaseUrl)?,
        };

        Ok(Self {
            api_key,
            base_url,
            env: AppEnv::from_var(app_env),
        })
    }
}
