//! PhoneRisk Server - HTTP API over the phone risk core.
//!
//! Exposes `POST /api/phone/risk` plus health and info endpoints, with
//! permissive CORS on every response.
//!
//! Run with: cargo run -p phonerisk-server
//! Then open: http://localhost:8080

pub mod api;
pub mod cors;
pub mod error;
pub mod models;

pub use api::{router, AppState};
pub use error::{ApiError, ServerError};
