//! Shape validation for phone numbers.
//!
//! A number is accepted when, after removing spaces and dashes, it is
//! either a mobile number (`09` plus 8 digits) or a landline number
//! (`0`, a 1-2 digit area code, then a 7-8 digit subscriber number).
//! Only ASCII digits count.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::PhoneShape;

static MOBILE: LazyLock<Regex> = LazyLock::new(|| compile(r"^09[0-9]{8}$"));

static LANDLINE: LazyLock<Regex> = LazyLock::new(|| compile(r"^0[0-9]{1,2}[0-9]{7,8}$"));

// Patterns are literals; a failure here is a programming error.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

/// Removes every space and dash from `raw`.
///
/// # Examples
///
/// ```
/// use phonerisk_core::clean;
///
/// assert_eq!(clean("02-1234 5678"), "0212345678");
/// ```
pub fn clean(raw: &str) -> String {
    raw.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

/// Returns the shape `raw` matches, if any.
///
/// Mobile numbers also fit the landline digit window; the mobile shape is
/// reported for them.
pub fn classify(raw: &str) -> Option<PhoneShape> {
    let cleaned = clean(raw);
    if MOBILE.is_match(&cleaned) {
        Some(PhoneShape::Mobile)
    } else if LANDLINE.is_match(&cleaned) {
        Some(PhoneShape::Landline)
    } else {
        None
    }
}

/// Returns true if `raw` is a syntactically valid phone number.
///
/// # Examples
///
/// ```
/// use phonerisk_core::is_valid;
///
/// assert!(is_valid("0987654321"));
/// assert!(is_valid("02-12345678"));
/// assert!(!is_valid("091234"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(raw: &str) -> bool {
    classify(raw).is_some()
}
