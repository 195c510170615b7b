//! Phone risk assessment server.
//!
//! Reads configuration from the file named by `PHONERISK_CONFIG`, or from
//! `phonerisk.toml` in the working directory when that file exists.

use std::path::Path;
use std::sync::Arc;

use phonerisk_config::{ConfigError, ServiceConfig};
use phonerisk_server::{api, ServerError};
use tokio::signal;
use tracing::{error, info};

const CONFIG_ENV: &str = "PHONERISK_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "phonerisk.toml";

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = load_config()?;
    phonerisk_console::init(&config.logging.filter, config.logging.banner);

    let addr = config.bind_addr()?;
    let state = Arc::new(api::AppState::from_config(&config));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(event = "listening", addr = %local_addr);
    info!("API info: http://{}/", local_addr);
    info!("health check: http://{}/health", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(event = "shutdown");
    Ok(())
}

// An explicitly named file must load; the default path is optional.
fn load_config() -> Result<ServiceConfig, ConfigError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => ServiceConfig::load(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => ServiceConfig::load(DEFAULT_CONFIG_PATH),
        None => Ok(ServiceConfig::default()),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
