//! REST API for phone risk assessment.
//!
//! | Method | Path               | Handler                        |
//! |--------|--------------------|--------------------------------|
//! | GET    | `/`                | [`handlers::service_info`]     |
//! | GET    | `/health`          | [`handlers::health`]           |
//! | POST   | `/api/phone/risk`  | [`handlers::evaluate_phone_risk`] |

pub mod handlers;

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use phonerisk_config::{ServiceConfig, ServiceInfoConfig};
use tower_http::trace::TraceLayer;

use crate::cors::cors;

/// Shared application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Name and description reported by `GET /`.
    pub service: ServiceInfoConfig,
}

impl AppState {
    pub fn new(service: ServiceInfoConfig) -> Self {
        Self { service }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.service.clone())
    }
}

/// Builds the router with CORS and request tracing applied.
pub fn router(state: Arc<AppState>) -> Router {
    let phone = Router::new().route("/risk", post(handlers::evaluate_phone_risk));

    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .nest("/api/phone", phone)
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
