//! Keypad layout and button styling
//!
//! Layout (the `0` button spans two columns):
//! ```text
//! [ AC ] [+/-] [ % ] [ / ]
//! [ 7  ] [ 8 ] [ 9 ] [ X ]
//! [ 4  ] [ 5 ] [ 6 ] [ - ]
//! [ 1  ] [ 2 ] [ 3 ] [ + ]
//! [    0     ] [ . ] [ = ]
//! ```
//!
//! Nothing in here talks to the engine; front ends look up the [`Key`] for a
//! button and hand it to [`Calculator::press`](crate::core::Calculator::press).

use serde::{Deserialize, Serialize};

use crate::core::{Key, Operator};

/// Color category of a button (presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonCategory {
    /// Digits and the decimal point
    Number,
    /// Arithmetic operators and equals
    Operator,
    /// AC, sign toggle and percent
    Function,
}

impl ButtonCategory {
    /// Background color as a `#RRGGBB` hex string
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Number => "#2D2D2D",
            Self::Operator => "#FF9427",
            Self::Function => "#9B9B9B",
        }
    }

    /// Background color as RGB components
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Number => (0x2D, 0x2D, 0x2D),
            Self::Operator => (0xFF, 0x94, 0x27),
            Self::Function => (0x9B, 0x9B, 0x9B),
        }
    }

    /// Category a key's button belongs to
    #[must_use]
    pub const fn of(key: &Key) -> Self {
        match key {
            Key::Digit(_) | Key::Point => Self::Number,
            Key::Operator(_) | Key::Equals => Self::Operator,
            Key::Clear | Key::ToggleSign | Key::Percent | Key::Backspace => Self::Function,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// Key sent when the button is pressed
    pub key: Key,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
    /// Whether the button is currently highlighted
    #[serde(skip)]
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a one-column button
    #[must_use]
    pub fn new(key: Key, row: usize, col: usize) -> Self {
        Self {
            key,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    /// Makes the button cover `span` columns
    #[must_use]
    pub fn wide(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Button face text
    #[must_use]
    pub fn label(&self) -> String {
        self.key.label()
    }

    /// Color category
    #[must_use]
    pub fn category(&self) -> ButtonCategory {
        ButtonCategory::of(&self.key)
    }

    /// Returns true if the button covers grid cell (`row`, `col`)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Returns true if this is the operator button for `pending`
    ///
    /// Front ends use this to keep the selected operator lit while its right
    /// operand is typed.
    #[must_use]
    pub fn is_active(&self, pending: Option<Operator>) -> bool {
        matches!((self.key, pending), (Key::Operator(op), Some(p)) if op == p)
    }
}

/// A rectangle in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    /// Left edge
    pub x: u16,
    /// Top edge
    pub y: u16,
    /// Width in cells
    pub width: u16,
    /// Height in cells
    pub height: u16,
}

impl Area {
    /// Creates an area
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if (`x`, `y`) lies inside the area
    #[must_use]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

/// The calculator keypad: 5 rows by 4 columns
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use Key::{Clear, Digit, Equals, Percent, Point, ToggleSign};
        let op = Key::Operator;

        let buttons = vec![
            // Row 0: AC +/- % /
            KeypadButton::new(Clear, 0, 0),
            KeypadButton::new(ToggleSign, 0, 1),
            KeypadButton::new(Percent, 0, 2),
            KeypadButton::new(op(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 X
            KeypadButton::new(Digit(7), 1, 0),
            KeypadButton::new(Digit(8), 1, 1),
            KeypadButton::new(Digit(9), 1, 2),
            KeypadButton::new(op(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButton::new(Digit(4), 2, 0),
            KeypadButton::new(Digit(5), 2, 1),
            KeypadButton::new(Digit(6), 2, 2),
            KeypadButton::new(op(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButton::new(Digit(1), 3, 0),
            KeypadButton::new(Digit(2), 3, 1),
            KeypadButton::new(Digit(3), 3, 2),
            KeypadButton::new(op(Operator::Add), 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButton::new(Digit(0), 4, 0).wide(2),
            KeypadButton::new(Point, 4, 2),
            KeypadButton::new(Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all buttons
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the index of the button covering a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds the button that sends `key`
    #[must_use]
    pub fn find_button(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Highlights the button for `key`, releasing every other one
    pub fn highlight(&mut self, key: Key) {
        self.release_all();
        if let Some(idx) = self.find_button(key) {
            self.buttons[idx].pressed = true;
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.pressed = false;
        }
    }

    /// Index of the button currently highlighted
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Converts a point inside `area` to the button under it
    ///
    /// The area is split evenly into the grid; leftover cells on the right
    /// and bottom edges hit nothing.
    #[must_use]
    pub fn hit_test(&self, area: Area, x: u16, y: u16) -> Option<usize> {
        if !area.contains(x, y) {
            return None;
        }

        let cell_width = area.width / self.cols as u16;
        let cell_height = area.height / self.rows as u16;
        if cell_width == 0 || cell_height == 0 {
            return None;
        }

        let col = ((x - area.x) / cell_width) as usize;
        let row = ((y - area.y) / cell_height) as usize;
        if row < self.rows && col < self.cols {
            self.index_at(row, col)
        } else {
            None
        }
    }

    /// Cell rectangle a button occupies when the keypad fills `area`
    #[must_use]
    pub fn button_area(&self, area: Area, index: usize) -> Option<Area> {
        let btn = self.buttons.get(index)?;
        let cell_width = area.width / self.cols as u16;
        let cell_height = area.height / self.rows as u16;
        Some(Area::new(
            area.x + btn.col as u16 * cell_width,
            area.y + btn.row as u16 * cell_height,
            cell_width * btn.span as u16,
            cell_height,
        ))
    }
}
