//! HTTP request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use phonerisk_core::{classify, evaluate};
use tracing::{debug, info, warn};

use crate::api::AppState;
use crate::error::ApiError;
use crate::models::{Endpoints, HealthResponse, PhoneRiskRequest, PhoneRiskResponse, ServiceInfo};

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    debug!("health check requested");
    Json(HealthResponse {
        status: "ok",
        message: "phone risk API is running",
    })
}

/// GET /
pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: state.service.name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        description: state.service.description.clone(),
        endpoints: Endpoints::default(),
    })
}

/// POST /api/phone/risk
pub async fn evaluate_phone_risk(
    payload: Result<Json<PhoneRiskRequest>, JsonRejection>,
) -> Result<Json<PhoneRiskResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) if !request.phone_number.is_empty() => request,
        Ok(_) => {
            warn!(event = "rejected", reason = "empty phone_number");
            return Err(ApiError::MalformedRequest);
        }
        Err(rejection) => {
            warn!(event = "rejected", reason = %rejection.body_text());
            return Err(ApiError::MalformedRequest);
        }
    };

    let evaluation = evaluate(&request.phone_number).inspect_err(|e| {
        warn!(event = "rejected", reason = %e);
    })?;

    let shape = classify(&request.phone_number).map_or("unknown", |shape| shape.as_str());
    info!(
        event = "evaluated",
        shape,
        risk_score = evaluation.risk_score.value(),
        risk_level = evaluation.risk_level.as_str()
    );

    Ok(Json(evaluation.into()))
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
