//! Number to display-string formatting
//!
//! Finite values use the shortest decimal text that parses back to the same
//! `f64`. Very large and very small magnitudes switch to exponent form so the
//! display never has to hold hundreds of digits.

/// At or above this magnitude results are shown in exponent form
const EXPONENT_ABOVE: f64 = 1e21;

/// Below this (non-zero) magnitude results are shown in exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Formats a computed value for the primary display
///
/// ```
/// use pocket_calc::core::format_number;
///
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // Covers -0.0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        signed_exponent(&format!("{value:e}"))
    } else {
        format!("{value}")
    }
}

/// Rewrites `1e21` as `1e+21`; negative exponents are left alone
fn signed_exponent(raw: &str) -> String {
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => raw.to_string(),
    }
}

/// Parses display text back into a value
///
/// Returns `None` for anything that is not a complete number, including the
/// empty string and a lone sign. The non-finite display words round-trip.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    match text {
        "" => None,
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ if text.chars().all(is_numeric_char) => text.parse().ok(),
        _ => None,
    }
}

/// Rust's float parser also accepts `inf`/`nan` spellings; the display never
/// shows those, so only plain numeric characters are let through.
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e')
}
