//! PhoneRisk Core - Phone number validation and risk scoring
//!
//! This crate provides the stateless core of the phone risk service:
//! - Shape validation for mobile and landline numbers
//! - A deterministic, hash-derived risk score in `[0, 100]`
//! - Classification of that score into a [`RiskLevel`]
//!
//! # Example
//!
//! ```
//! use phonerisk_core::{evaluate, RiskLevel};
//!
//! let evaluation = evaluate("0987654321").unwrap();
//! assert_eq!(evaluation.phone_number, "0987654321");
//! assert_eq!(evaluation.risk_level, RiskLevel::High);
//!
//! assert!(evaluate("123").is_err());
//! ```

pub mod error;
pub mod scorer;
pub mod types;
pub mod validator;

#[cfg(test)]
mod tests;

pub use error::{PhoneRiskError, Result};
pub use scorer::{base_score, calculate_risk_score, evaluate, pattern_bonus, COMPLETION_MESSAGE};
pub use types::{PhoneShape, RiskEvaluation, RiskLevel, RiskScore};
pub use validator::{classify, clean, is_valid};
