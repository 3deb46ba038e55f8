//! Input events accepted by the engine

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::operations::Operator;

/// One press on the keypad (or its keyboard/gesture equivalent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum Key {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Point,
    /// A binary operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything (AC)
    Clear,
    /// Flip the sign of the current operand (+/-)
    ToggleSign,
    /// Divide the current operand by 100 (%)
    Percent,
    /// Delete the last character (left swipe on the display)
    Backspace,
}

/// Error returned when a key label is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// The label is empty
    #[error("empty key label")]
    Empty,
    /// The label does not name any key
    #[error("unknown key '{label}'")]
    Unknown {
        /// Label as given
        label: String,
    },
}

impl KeyParseError {
    /// Create an unknown-label error
    #[must_use]
    pub fn unknown(label: impl Into<String>) -> Self {
        Self::Unknown {
            label: label.into(),
        }
    }
}

impl Key {
    /// Creates a digit key, or `None` for values above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Maps a typed character to a key
    ///
    /// Covers digits, the point and the operator characters; function keys
    /// have no single-character form apart from `%`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).and_then(|d| Self::digit(d as u8)),
            '.' => Some(Self::Point),
            '%' => Some(Self::Percent),
            '=' => Some(Self::Equals),
            _ => Operator::from_symbol(c.encode_utf8(&mut [0; 4])).map(Self::Operator),
        }
    }

    /// Character this key feeds into the input buffer, if any
    #[must_use]
    pub fn input_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Point => Some('.'),
            _ => None,
        }
    }

    /// Button face text
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Point => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::ToggleSign => "+/-".to_string(),
            Self::Percent => "%".to_string(),
            Self::Backspace => "DEL".to_string(),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.is_empty() {
            return Err(KeyParseError::Empty);
        }
        match label {
            "AC" | "ac" | "C" | "c" => Ok(Self::Clear),
            "+/-" | "±" => Ok(Self::ToggleSign),
            "DEL" | "del" | "<" | "⌫" => Ok(Self::Backspace),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c).ok_or_else(|| KeyParseError::unknown(label)),
                    _ => Err(KeyParseError::unknown(label)),
                }
            }
        }
    }
}

/// Splits a whitespace-separated key script into keys
///
/// Tokens made only of digits and points expand to one key per character, so
/// `"12.5 + 3 ="` and `"1 2 . 5 + 3 ="` are the same script.
pub fn parse_sequence(script: &str) -> Result<Vec<Key>, KeyParseError> {
    let mut keys = Vec::new();
    for token in script.split_whitespace() {
        if token.len() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            keys.extend(token.chars().filter_map(Key::from_char));
        } else {
            keys.push(token.parse()?);
        }
    }
    Ok(keys)
}
