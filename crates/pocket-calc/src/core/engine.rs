//! The calculator state machine
//!
//! Four fields, mutated only through the operations below:
//!
//! | field          | initial | meaning                                  |
//! |----------------|---------|------------------------------------------|
//! | `display`      | `0`     | operand being typed or the last result   |
//! | `stored`       | empty   | left operand saved by an operator press  |
//! | `pending`      | none    | operator awaiting its right operand      |
//! | `fresh_result` | false   | next digit starts a new number           |
//!
//! No operation fails. Bad input is ignored and unparseable operands count as
//! zero, so the engine is renderable after any sequence of presses.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::format::{format_number, parse_number};
use super::key::Key;
use super::operand::InputBuffer;
use super::operations::Operator;

/// Read-out of both display lines plus the operator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Primary (large) display line
    pub primary: String,
    /// Secondary display line: the stored left operand
    pub secondary: String,
    /// Operator waiting for its right operand
    pub pending: Option<Operator>,
    /// Whether the primary line shows a just-computed result
    pub fresh_result: bool,
}

/// Keypad calculator engine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Calculator {
    display: InputBuffer,
    stored: String,
    pending: Option<Operator>,
    fresh_result: bool,
}

impl Calculator {
    /// Creates an engine in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary display text
    #[must_use]
    pub fn primary(&self) -> &str {
        self.display.as_str()
    }

    /// Secondary display text (empty when nothing is stored)
    #[must_use]
    pub fn secondary(&self) -> &str {
        &self.stored
    }

    /// Operator awaiting its right operand
    #[must_use]
    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    /// Whether the display shows a result the next digit will replace
    #[must_use]
    pub fn has_fresh_result(&self) -> bool {
        self.fresh_result
    }

    /// Captures both display lines
    #[must_use]
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            primary: self.primary().to_string(),
            secondary: self.stored.clone(),
            pending: self.pending,
            fresh_result: self.fresh_result,
        }
    }

    /// Dispatches one key press
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(_) | Key::Point => {
                if let Some(c) = key.input_char() {
                    self.input_digit(c);
                }
            }
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.evaluate(),
            Key::Clear => self.clear(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
            Key::Backspace => self.backspace(),
        }
        debug!(
            key = %key,
            primary = %self.display,
            secondary = %self.stored,
            "key pressed"
        );
    }

    /// Pure form of [`press`](Self::press)
    #[must_use]
    pub fn step(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    /// Feeds a digit or the decimal point into the display
    ///
    /// Ignored when `d` is neither, when the display is already full, or
    /// when `d` is a point and the display already holds one. Both checks
    /// look at the display as shown, so they also apply to a fresh result.
    pub fn input_digit(&mut self, d: char) {
        if !d.is_ascii_digit() && d != '.' {
            trace!(input = %d, "rejected non-numeric input");
            return;
        }
        if self.display.is_full() {
            trace!(display = %self.display, "display full");
            return;
        }
        if d == '.' && self.display.has_point() {
            return;
        }

        if self.fresh_result {
            self.display.start_with(d);
            self.fresh_result = false;
        } else {
            self.display.append(d);
        }
    }

    /// Adds or removes a leading minus; `0` is left alone
    pub fn toggle_sign(&mut self) {
        self.display.toggle_sign();
    }

    /// Deletes the last character of the display
    pub fn backspace(&mut self) {
        self.display.pop();
    }

    /// Divides the display by 100
    ///
    /// The scaled value counts as a result, so the next digit starts over.
    pub fn percent(&mut self) {
        if self.display.is_zero() {
            return;
        }
        self.display = InputBuffer::from_value(self.display.value() / 100.0);
        self.fresh_result = true;
    }

    /// Selects `op`, first folding any pending operation into the stored
    /// operand so chains evaluate left to right
    pub fn set_operator(&mut self, op: Operator) {
        if let Some(previous) = self.pending {
            let subtotal = self.compute(previous);
            trace!(op = %previous, subtotal, "folded pending operation");
            self.stored = format_number(subtotal);
        } else {
            self.stored = self.display.committed();
        }
        self.display.reset();
        self.pending = Some(op);
        self.fresh_result = false;
    }

    /// Applies the pending operator (`=`)
    ///
    /// Without a pending operator this is a full clear.
    pub fn evaluate(&mut self) {
        let Some(op) = self.pending else {
            self.clear();
            return;
        };

        let result = self.compute(op);
        if !result.is_finite() {
            debug!(op = %op, result, "non-finite result");
        }
        self.display = InputBuffer::from_value(result);
        self.stored.clear();
        self.pending = None;
        self.fresh_result = true;
    }

    /// Returns every field to its initial value
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Applies `op` to the stored and displayed operands
    fn compute(&self, op: Operator) -> f64 {
        let lhs = parse_number(&self.stored).unwrap_or(0.0);
        op.apply(lhs, self.display.value())
    }
}
