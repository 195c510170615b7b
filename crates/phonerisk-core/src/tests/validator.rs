use crate::types::PhoneShape;
use crate::validator::*;

#[test]
fn test_accepts_mobile() {
    assert!(is_valid("0987654321"));
    assert!(is_valid("0912345678"));
    assert_eq!(classify("0987654321"), Some(PhoneShape::Mobile));
}

#[test]
fn test_accepts_landline() {
    assert!(is_valid("0212345678"));
    assert!(is_valid("037654321"));
    assert_eq!(classify("0212345678"), Some(PhoneShape::Landline));
    assert_eq!(classify("037654321"), Some(PhoneShape::Landline));
}

#[test]
fn test_separators_are_ignored() {
    assert!(is_valid("02-12345678"));
    assert!(is_valid("0987 654 321"));
    assert!(is_valid("0987-654 321"));
    assert!(is_valid(" 0987654321 "));
}

#[test]
fn test_rejects_malformed() {
    assert!(!is_valid(""));
    assert!(!is_valid("abc"));
    assert!(!is_valid("123"));
    assert!(!is_valid("091234"));
    assert!(!is_valid("   -- "));
    assert_eq!(classify("abc"), None);
}

#[test]
fn test_rejects_length_mismatch() {
    // 0 + 1 digit + 6 digits is one short of the landline window.
    assert!(!is_valid("02123456"));
    // 12 digits is past both windows.
    assert!(!is_valid("098765432100"));
}

#[test]
fn test_rejects_missing_leading_zero() {
    assert!(!is_valid("9876543210"));
    assert!(!is_valid("+886987654321"));
}

#[test]
fn test_rejects_other_separators() {
    assert!(!is_valid("(02)12345678"));
    assert!(!is_valid("02.1234.5678"));
    assert!(!is_valid("0987\t654321"));
}

#[test]
fn test_rejects_non_ascii_digits() {
    // Full-width digits
    assert!(!is_valid("０９８７６５４３２１"));
    // Arabic-Indic digits
    assert!(!is_valid("٠٩٨٧٦٥٤٣٢١"));
}

#[test]
fn test_clean() {
    assert_eq!(clean("02-1234-5678"), "0212345678");
    assert_eq!(clean("0987 654 321"), "0987654321");
    assert_eq!(clean(""), "");
}
