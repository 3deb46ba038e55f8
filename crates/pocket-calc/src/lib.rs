//! Pocket Calc - keypad calculator engine
//!
//! A single-screen calculator: digits accumulate into the primary display,
//! operators fold strictly left to right, and the stored left operand is
//! shown on a secondary line above.
//!
//! # Modules
//!
//! - [`core`]: the engine state machine, keys and number formatting
//! - [`keypad`]: button layout and color categories
//! - [`gesture`]: swipe recognition for display backspace
//! - [`driver`]: one driver trait for every front end
//! - `tui`: interactive terminal front end (feature `tui`)
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in parse_sequence("5 + 3 +").unwrap() {
//!     calc.press(key);
//! }
//! assert_eq!(calc.secondary(), "8");
//!
//! calc.press(Key::Digit(2));
//! calc.press(Key::Equals);
//! assert_eq!(calc.primary(), "10");
//!
//! // Division by zero is displayed, not trapped
//! let calc = parse_sequence("9 / 0 =")
//!     .unwrap()
//!     .into_iter()
//!     .fold(Calculator::new(), Calculator::step);
//! assert_eq!(calc.primary(), "Infinity");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod gesture;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_number, parse_sequence, Calculator, DisplaySnapshot, InputBuffer, Key,
        KeyParseError, Operator,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::gesture::{Point, SwipeConfig, SwipeDirection, SwipeRecognizer};
    pub use crate::keypad::{Area, ButtonCategory, Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
