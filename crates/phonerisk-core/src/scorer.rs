//! Deterministic risk scoring.
//!
//! The score is not a fraud signal. It is a stable pseudo-random value
//! taken from the MD5 digest of the submitted string, nudged upward for a
//! couple of digit patterns, clamped to `[0, 100]` and rounded to a tenth.
//! MD5 is fixed so that scores stay identical across deployments.

use md5::{Digest, Md5};

use crate::error::{PhoneRiskError, Result};
use crate::types::{RiskEvaluation, RiskLevel, RiskScore};
use crate::validator::{clean, is_valid};

/// Message attached to every successful evaluation.
pub const COMPLETION_MESSAGE: &str = "phone number risk assessment completed";

/// Added when the cleaned number contains an ascending run.
const SEQUENCE_BONUS: f64 = 15.0;

/// Added when the third digit repeats often.
const REPEAT_BONUS: f64 = 10.0;

const SEQUENCES: [&str; 2] = ["1234", "5678"];

/// Occurrences of the third digit needed for [`REPEAT_BONUS`].
const REPEAT_THRESHOLD: usize = 4;

/// Hash-derived part of the score, in `[0, 100)`.
///
/// Hashes `raw` exactly as given, separators included, so `"02-12345678"`
/// and `"0212345678"` get different bases.
pub fn base_score(raw: &str) -> f64 {
    let digest = Md5::digest(raw.as_bytes());
    // First 8 hex characters of the digest, read as an integer.
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    f64::from(prefix % 10_000) / 100.0
}

/// Pattern adjustments for an already cleaned number.
///
/// # Examples
///
/// ```
/// use phonerisk_core::pattern_bonus;
///
/// assert_eq!(pattern_bonus("0987654321"), 0.0);
/// assert_eq!(pattern_bonus("0212345678"), 15.0);
/// assert_eq!(pattern_bonus("0999999999"), 10.0);
/// assert_eq!(pattern_bonus("0911112345"), 25.0);
/// ```
pub fn pattern_bonus(cleaned: &str) -> f64 {
    let mut bonus = 0.0;

    if SEQUENCES.iter().any(|seq| cleaned.contains(seq)) {
        bonus += SEQUENCE_BONUS;
    }

    let bytes = cleaned.as_bytes();
    if let Some(&third) = bytes.get(2) {
        if bytes.iter().filter(|&&b| b == third).count() >= REPEAT_THRESHOLD {
            bonus += REPEAT_BONUS;
        }
    }

    bonus
}

/// Computes the score for `raw` without validating it first.
pub fn calculate_risk_score(raw: &str) -> RiskScore {
    RiskScore::from_raw(base_score(raw) + pattern_bonus(&clean(raw)))
}

/// Validates and scores a phone number.
///
/// # Errors
///
/// Returns [`PhoneRiskError::InvalidFormat`] if `raw` is neither a mobile
/// nor a landline number.
pub fn evaluate(raw: &str) -> Result<RiskEvaluation> {
    if !is_valid(raw) {
        return Err(PhoneRiskError::InvalidFormat);
    }

    let risk_score = calculate_risk_score(raw);
    Ok(RiskEvaluation {
        phone_number: raw.to_string(),
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        message: COMPLETION_MESSAGE,
    })
}
