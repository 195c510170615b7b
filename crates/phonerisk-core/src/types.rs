//! Domain types produced by an evaluation.

use std::fmt;

/// Upper bound of a risk score.
const MAX_SCORE: f64 = 100.0;

/// Scores below this are [`RiskLevel::Low`].
const MEDIUM_THRESHOLD: f64 = 30.0;

/// Scores at or above this are [`RiskLevel::High`].
const HIGH_THRESHOLD: f64 = 70.0;

/// A risk score in `[0, 100]` with at most one decimal digit.
///
/// # Examples
///
/// ```
/// use phonerisk_core::RiskScore;
///
/// assert_eq!(RiskScore::from_raw(42.06).value(), 42.1);
/// assert_eq!(RiskScore::from_raw(131.2).value(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RiskScore(f64);

impl RiskScore {
    /// The lowest possible score.
    pub const MIN: RiskScore = RiskScore(0.0);

    /// The highest possible score.
    pub const MAX: RiskScore = RiskScore(MAX_SCORE);

    /// Clamps `raw` to `[0, 100]` and rounds it to the nearest tenth,
    /// halves away from zero.
    pub fn from_raw(raw: f64) -> Self {
        let clamped = raw.clamp(0.0, MAX_SCORE);
        RiskScore((clamped * 10.0).round() / 10.0)
    }

    /// Returns the score value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns the level this score falls into.
    #[inline]
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(*self)
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Discrete risk bucket derived from a [`RiskScore`].
///
/// Ordered from least to most risky, so `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskLevel {
    /// Score below 30.
    Low,
    /// Score in `[30, 70)`.
    Medium,
    /// Score of 70 or more.
    High,
}

impl RiskLevel {
    /// Maps a score onto its level.
    ///
    /// # Examples
    ///
    /// ```
    /// use phonerisk_core::{RiskLevel, RiskScore};
    ///
    /// assert_eq!(RiskLevel::from_score(RiskScore::from_raw(29.9)), RiskLevel::Low);
    /// assert_eq!(RiskLevel::from_score(RiskScore::from_raw(30.0)), RiskLevel::Medium);
    /// assert_eq!(RiskLevel::from_score(RiskScore::from_raw(70.0)), RiskLevel::High);
    /// ```
    pub fn from_score(score: RiskScore) -> Self {
        let value = score.value();
        if value < MEDIUM_THRESHOLD {
            RiskLevel::Low
        } else if value < HIGH_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Returns the wire name of this level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which accepted shape a phone number matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneShape {
    /// `09` followed by 8 digits.
    Mobile,
    /// `0`, a 1-2 digit area code, then a 7-8 digit subscriber number.
    Landline,
}

impl PhoneShape {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PhoneShape::Mobile => "mobile",
            PhoneShape::Landline => "landline",
        }
    }
}

impl fmt::Display for PhoneShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating a single phone number.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskEvaluation {
    /// The number exactly as submitted, separators included.
    pub phone_number: String,
    pub risk_score: RiskScore,
    pub risk_level: RiskLevel,
    pub message: &'static str,
}
