//! Error types for phone risk evaluation

use thiserror::Error;

/// Main error type for phone risk operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneRiskError {
    /// Input matched neither the mobile nor the landline shape
    #[error("invalid phone number format")]
    InvalidFormat,
}

/// Result type alias for phone risk operations
pub type Result<T> = std::result::Result<T, PhoneRiskError>;
