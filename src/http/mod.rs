//! HTTP entry points: one route per gateway operation, permissive CORS, and
//! method enforcement via the router.

mod handlers;

pub use handlers::AppState;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use crate::client::{InfobipClient, InfobipError};
use crate::config::{AppEnv, GatewayConfig};
use crate::service::SmsService;

impl AppState {
    /// Build a fully configured state: a vendor client against the
    /// configured base URL, wrapped in the translation layer.
    pub fn from_config(config: GatewayConfig) -> Result<Self, InfobipError> {
        let client = InfobipClient::builder(config.api_key)
            .base_url(config.base_url)
            .build()?;
        Ok(Self {
            service: Some(SmsService::new(client)),
            env: config.env,
        })
    }

    /// State for a gateway started without an API key: every entry point
    /// answers with a configuration failure.
    pub fn unconfigured(env: AppEnv) -> Self {
        Self { service: None, env }
    }
}

/// Assemble the gateway router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/send",
            post(handlers::send_sms).options(handlers::preflight),
        )
        .route(
            "/api/preview",
            post(handlers::preview_sms).options(handlers::preflight),
        )
        .route(
            "/api/delivery-reports",
            get(handlers::delivery_reports).options(handlers::preflight),
        )
        .route(
            "/api/webhooks/inbound",
            post(handlers::inbound_webhook).options(handlers::preflight),
        )
        .route(
            "/api/webhooks/delivery",
            post(handlers::delivery_webhook).options(handlers::preflight),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::domain::ApiKey;

    use super::*;

    #[test]
    fn from_config_builds_a_configured_state() {
        let config = GatewayConfig {
            api_key: ApiKey::new("key").unwrap(),
            base_url: Url::parse("https://example.invalid").unwrap(),
            env: AppEnv::Production,
        };
        let state = AppState::from_config(config).unwrap();
        assert!(state.service.is_some());
        assert_eq!(state.env, AppEnv::Production);
    }

    #[test]
    fn unconfigured_state_has_no_service() {
        let state = AppState::unconfigured(AppEnv::Development);
        assert!(state.service.is_none());
    }

    #[test]
    fn router_assembles_with_either_state() {
        let _ = router(Arc::new(AppState::unconfigured(AppEnv::Development)));
    }
}
