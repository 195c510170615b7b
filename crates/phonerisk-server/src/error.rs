//! Error types for the HTTP boundary and server startup

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use phonerisk_config::ConfigError;
use phonerisk_core::PhoneRiskError;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors returned to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was not JSON, or lacked a non-empty string `phone_number`
    #[error("invalid request format")]
    MalformedRequest,

    /// Phone number failed shape validation
    #[error(transparent)]
    InvalidFormat(#[from] PhoneRiskError),

    /// No route matched
    #[error("not found")]
    NotFound,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest | ApiError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Returns the human-facing hint sent as `message`.
    pub fn hint(&self) -> &'static str {
        match self {
            ApiError::MalformedRequest => {
                "please provide a JSON body with the required phone_number field"
            }
            ApiError::InvalidFormat(_) => {
                "please provide a valid Taiwan phone number (mobile: 09XXXXXXXX, landline: 0X-XXXXXXXX)"
            }
            ApiError::NotFound => "no such endpoint, see GET / for the route table",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            message: self.hint().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
