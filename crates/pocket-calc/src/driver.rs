//! Unified calculator driver
//!
//! Scenario checks are written once against [`CalculatorDriver`] and run
//! against every front end: the bare engine here, and the terminal app when
//! the `tui` feature is on.

use crate::core::{Calculator, DisplaySnapshot, Key, Operator};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Sends one key press
    fn press(&mut self, key: Key);

    /// Primary display text
    fn primary(&self) -> String;

    /// Secondary display text
    fn secondary(&self) -> String;

    /// Resets the calculator
    fn clear(&mut self);

    /// Current display state
    fn snapshot(&self) -> DisplaySnapshot;

    /// Sends keys in order
    fn press_all(&mut self, keys: &[Key]) {
        for key in keys {
            self.press(*key);
        }
    }
}

/// Driver over a bare [`Calculator`]
#[derive(Debug, Default)]
pub struct EngineDriver {
    calc: Calculator,
}

impl EngineDriver {
    /// Creates a driver over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, key: Key) {
        self.calc.press(key);
    }

    fn primary(&self) -> String {
        self.calc.primary().to_string()
    }

    fn secondary(&self) -> String {
        self.calc.secondary().to_string()
    }

    fn clear(&mut self) {
        self.calc.clear();
    }

    fn snapshot(&self) -> DisplaySnapshot {
        self.calc.snapshot()
    }
}

// ===== Unified scenario checks =====
// These work with ANY CalculatorDriver implementation

const fn digit(d: u8) -> Key {
    Key::Digit(d)
}

const fn op(o: Operator) -> Key {
    Key::Operator(o)
}

/// `7 + 8 =` shows 15
pub fn verify_addition<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&[digit(7), op(Operator::Add), digit(8), Key::Equals]);
    assert_eq!(driver.primary(), "15");
    assert_eq!(driver.secondary(), "");
}

/// `5 + 3 + 2 =` folds to 8 on the second `+`, then shows 10
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&[digit(5), op(Operator::Add), digit(3), op(Operator::Add)]);
    assert_eq!(driver.secondary(), "8");
    assert_eq!(driver.primary(), "0");
    driver.press_all(&[digit(2), Key::Equals]);
    assert_eq!(driver.primary(), "10");
}

/// `9 / 0 =` shows Infinity and the calculator keeps working
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&[digit(9), op(Operator::Divide), digit(0), Key::Equals]);
    assert_eq!(driver.primary(), "Infinity");
    driver.press_all(&[digit(4), op(Operator::Multiply), digit(2), Key::Equals]);
    assert_eq!(driver.primary(), "8");
}

/// Sign toggle, percent and backspace edit the primary display
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&[digit(1), digit(2), Key::ToggleSign]);
    assert_eq!(driver.primary(), "-12");
    driver.press(Key::Backspace);
    assert_eq!(driver.primary(), "-1");
    driver.press(Key::Backspace);
    assert_eq!(driver.primary(), "0");
    driver.press_all(&[digit(5), digit(0), Key::Percent]);
    assert_eq!(driver.primary(), "0.5");
}

/// AC returns to the initial display
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&[digit(3), op(Operator::Subtract), digit(1), Key::Clear]);
    assert_eq!(driver.snapshot(), Calculator::new().snapshot());
}

/// A digit right after `=` starts a new number
pub fn verify_fresh_number_after_result<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&[digit(2), op(Operator::Multiply), digit(3), Key::Equals, digit(4)]);
    assert_eq!(driver.primary(), "4");
    assert_eq!(driver.secondary(), "");
}

/// Complete verification suite
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_addition(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_editing(driver);
    verify_clear(driver);
    verify_fresh_number_after_result(driver);
}
