//! Digit-by-digit input buffer for the primary display
//!
//! The buffer is kept as text because leading zeros, a trailing point and a
//! lone minus sign are all meaningful while typing and none of them survive a
//! round trip through `f64`.

use serde::{Deserialize, Serialize};

use super::format::{format_number, parse_number};

/// Input stops growing once the buffer is longer than this
pub const MAX_INPUT_LEN: usize = 9;

/// Text of the operand currently being typed or shown
///
/// Invariants: never empty, at most one decimal point, and never left as
/// `-0` after a deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputBuffer {
    text: String,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBuffer {
    /// Creates a buffer showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
        }
    }

    /// Creates a buffer holding a computed value
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self {
            text: format_number(value),
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns true when the buffer shows exactly `0`
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.text == "0"
    }

    /// Returns true when the buffer already holds a decimal point
    #[must_use]
    pub fn has_point(&self) -> bool {
        self.text.contains('.')
    }

    /// Returns true when no more characters may be appended
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.text.chars().count() > MAX_INPUT_LEN
    }

    /// Parsed value, with anything unparseable counted as zero
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_number(&self.text).unwrap_or(0.0)
    }

    /// Resets the buffer to `0`
    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push('0');
    }

    /// Replaces the buffer with a fresh number starting at `c`
    ///
    /// A point becomes `0.`.
    pub fn start_with(&mut self, c: char) {
        self.text.clear();
        if c == '.' {
            self.text.push('0');
        }
        self.text.push(c);
    }

    /// Appends `c`, replacing a lone `0` unless `c` is the point
    pub fn append(&mut self, c: char) {
        if self.is_zero() && c != '.' {
            self.text.clear();
        }
        self.text.push(c);
    }

    /// Adds or removes a leading minus sign; `0` and `NaN` are left unsigned
    ///
    /// `-NaN` would not parse back, so the next operation would read it as 0.
    pub fn toggle_sign(&mut self) {
        if self.is_zero() || self.text == "NaN" {
            return;
        }
        if let Some(rest) = self.text.strip_prefix('-') {
            self.text = rest.to_string();
        } else {
            self.text.insert(0, '-');
        }
    }

    /// Removes the last character
    ///
    /// Falls back to `0` when what remains is empty, not a number, or `-0`.
    pub fn pop(&mut self) {
        self.text.pop();
        if self.text.is_empty() || self.text == "-0" || parse_number(&self.text).is_none() {
            self.reset();
        }
    }

    /// Text to store as the left operand: a dangling point is dropped
    #[must_use]
    pub fn committed(&self) -> String {
        self.text
            .strip_suffix('.')
            .unwrap_or(&self.text)
            .to_string()
    }
}

impl std::fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> InputBuffer {
        InputBuffer {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_new_shows_zero() {
        let buf = InputBuffer::new();
        assert_eq!(buf.as_str(), "0");
        assert!(buf.is_zero());
        assert!(!buf.has_point());
    }

    #[test]
    fn test_append_replaces_lone_zero() {
        let mut buf = InputBuffer::new();
        buf.append('5');
        assert_eq!(buf.as_str(), "5");
    }

    #[test]
    fn test_append_point_keeps_zero() {
        let mut buf = InputBuffer::new();
        buf.append('.');
        assert_eq!(buf.as_str(), "0.");
        buf.append('0');
        assert_eq!(buf.as_str(), "0.0");
    }

    #[test]
    fn test_start_with_point() {
        let mut buf = buffer("15");
        buf.start_with('.');
        assert_eq!(buf.as_str(), "0.");
        buf.start_with('7');
        assert_eq!(buf.as_str(), "7");
    }

    #[test]
    fn test_is_full_after_ten_chars() {
        assert!(!buffer("123456789").is_full());
        assert!(buffer("1234567890").is_full());
    }

    #[test]
    fn test_toggle_sign() {
        let mut buf = buffer("12");
        buf.toggle_sign();
        assert_eq!(buf.as_str(), "-12");
        buf.toggle_sign();
        assert_eq!(buf.as_str(), "12");
    }

    #[test]
    fn test_toggle_sign_on_zero_is_noop() {
        let mut buf = InputBuffer::new();
        buf.toggle_sign();
        assert_eq!(buf.as_str(), "0");

        let mut buf = buffer("NaN");
        buf.toggle_sign();
        assert_eq!(buf.as_str(), "NaN");
    }

    #[test]
    fn test_toggle_sign_only_touches_leading_minus() {
        let mut buf = buffer("1e-7");
        buf.toggle_sign();
        assert_eq!(buf.as_str(), "-1e-7");
        buf.toggle_sign();
        assert_eq!(buf.as_str(), "1e-7");
    }

    #[test]
    fn test_pop_cases() {
        let mut buf = buffer("12");
        buf.pop();
        assert_eq!(buf.as_str(), "1");

        let mut buf = buffer("-5");
        buf.pop();
        assert_eq!(buf.as_str(), "0");

        let mut buf = InputBuffer::new();
        buf.pop();
        assert_eq!(buf.as_str(), "0");

        let mut buf = buffer("-0.");
        buf.pop();
        assert_eq!(buf.as_str(), "0");

        let mut buf = buffer("3.");
        buf.pop();
        assert_eq!(buf.as_str(), "3");
    }

    #[test]
    fn test_pop_non_finite_resets() {
        let mut buf = buffer("Infinity");
        buf.pop();
        assert_eq!(buf.as_str(), "0");
    }

    #[test]
    fn test_committed_trims_trailing_point() {
        assert_eq!(buffer("12.").committed(), "12");
        assert_eq!(buffer("12.5").committed(), "12.5");
        assert_eq!(buffer("0.").committed(), "0");
    }

    #[test]
    fn test_value_is_lenient() {
        assert_eq!(buffer("2.5").value(), 2.5);
        assert_eq!(buffer("-").value(), 0.0);
        assert_eq!(InputBuffer::from_value(-3.0).as_str(), "-3");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&buffer("0.5")).unwrap();
        assert_eq!(json, "\"0.5\"");
    }
}
