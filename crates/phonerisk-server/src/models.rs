//! JSON bodies exchanged over the HTTP API.

use phonerisk_core::{RiskEvaluation, RiskLevel, RiskScore};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/phone/risk`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhoneRiskRequest {
    pub phone_number: String,
}

/// Successful evaluation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhoneRiskResponse {
    pub phone_number: String,
    pub risk_score: RiskScore,
    pub risk_level: RiskLevel,
    pub message: String,
}

impl From<RiskEvaluation> for PhoneRiskResponse {
    fn from(evaluation: RiskEvaluation) -> Self {
        Self {
            phone_number: evaluation.phone_number,
            risk_score: evaluation.risk_score,
            risk_level: evaluation.risk_level,
            message: evaluation.message.to_string(),
        }
    }
}

/// Error body: a machine-facing `error` and a human-facing `message`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: &'static str,
    pub status: &'static str,
    pub description: String,
    pub endpoints: Endpoints,
}

/// Route table advertised by `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub phone_risk: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            health: "GET /health",
            phone_risk: "POST /api/phone/risk",
        }
    }
}
