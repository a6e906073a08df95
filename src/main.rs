use std::sync::Arc;

use log::{info, warn};

use smsgate::config::{AppEnv, ConfigError, GatewayConfig};
use smsgate::http::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();

    let state = match GatewayConfig::from_env() {
        Ok(config) => {
            info!("Using Infobip base URL {}", config.base_url);
            Arc::new(AppState::from_config(config)?)
        }
        Err(ConfigError::MissingApiKey) => {
            warn!("INFOBIP_API_KEY is not set; every request will answer with a configuration failure");
            Arc::new(AppState::unconfigured(AppEnv::from_env()))
        }
        Err(err) => return Err(err.into()),
    };

    let port: u16 = std::env::var("SMSGATE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let app = http::router(state);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
