//! Screen layout and rendering
//!
//! ```text
//! ┌────────────────────────────┐
//! │                          12│  <- secondary (stored operand)
//! │                           3│  <- primary
//! ├────────────────────────────┤
//! │  AC    +/-    %     /      │
//! │                            │
//! │   7     8     9    [X]     │  <- active operator in brackets
//! ...
//! │ swipe left: del   q: quit  │
//! └────────────────────────────┘
//! ```

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
};

use super::app::CalculatorApp;
use super::grid::TextGrid;
use crate::keypad::{Area, KeypadButton};

/// Screen width in cells
pub const SCREEN_WIDTH: u16 = 30;
/// Screen height in cells
pub const SCREEN_HEIGHT: u16 = 16;

const HINT: &str = "swipe left: del   q: quit";

/// Where each part of the screen sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Both display lines (secondary on top, primary below)
    pub display: Area,
    /// Keypad grid
    pub keypad: Area,
    /// Row of the divider between display and keypad
    pub divider_row: u16,
    /// Row of the key hint line
    pub hint_row: u16,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenLayout {
    /// Layout for the fixed-size screen
    #[must_use]
    pub const fn new() -> Self {
        Self {
            display: Area::new(1, 1, SCREEN_WIDTH - 2, 2),
            keypad: Area::new(1, 4, SCREEN_WIDTH - 2, 10),
            divider_row: 3,
            hint_row: 14,
        }
    }

    /// Row of the secondary display line
    #[must_use]
    pub const fn secondary_row(&self) -> u16 {
        self.display.y
    }

    /// Row of the primary display line
    #[must_use]
    pub const fn primary_row(&self) -> u16 {
        self.display.y + 1
    }
}

/// Button face as drawn: highlighted buttons get brackets
fn button_face(button: &KeypadButton, highlighted: bool) -> String {
    if highlighted {
        format!("[{}]", button.label())
    } else {
        button.label()
    }
}

/// Label row inside a button area; the last column is left as a gap
fn label_area(area: Area) -> Area {
    Area::new(area.x, area.y, area.width.saturating_sub(1), 1)
}

/// Renders the whole screen into a grid
#[must_use]
pub fn render(app: &CalculatorApp) -> TextGrid {
    let layout = app.layout();
    let calc = app.calculator();
    let keypad = app.keypad();

    let mut grid = TextGrid::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    grid.draw_border();
    grid.draw_divider(layout.divider_row);

    grid.write_right(layout.display, layout.secondary_row(), calc.secondary());
    grid.write_right(layout.display, layout.primary_row(), calc.primary());

    for (index, button) in keypad.buttons().iter().enumerate() {
        let Some(area) = keypad.button_area(layout.keypad, index) else {
            continue;
        };
        let highlighted = button.pressed || button.is_active(calc.pending());
        let target = label_area(area);
        grid.write_centered(target, target.y, &button_face(button, highlighted));
    }

    grid.write_centered(Area::new(1, layout.hint_row, SCREEN_WIDTH - 2, 1), layout.hint_row, HINT);
    grid
}

/// Draws the screen to a terminal, coloring each button by category
pub fn draw<W: Write>(app: &CalculatorApp, out: &mut W) -> io::Result<()> {
    let grid = render(app);
    for (y, line) in grid.to_lines().iter().enumerate() {
        queue!(out, MoveTo(0, y as u16), Print(format!("{line:<width$}", width = SCREEN_WIDTH as usize)))?;
    }

    let layout = app.layout();
    let keypad = app.keypad();
    let pending = app.calculator().pending();
    for (index, button) in keypad.buttons().iter().enumerate() {
        let Some(area) = keypad.button_area(layout.keypad, index) else {
            continue;
        };
        let target = label_area(area);
        let highlighted = button.pressed || button.is_active(pending);
        let (r, g, b) = button.category().rgb();
        let face = button_face(button, highlighted);

        queue!(
            out,
            MoveTo(target.x, target.y),
            SetBackgroundColor(Color::Rgb { r, g, b }),
            SetForegroundColor(Color::White)
        )?;
        if highlighted {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(
            out,
            Print(format!("{face:^width$}", width = target.width as usize)),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
    }
    out.flush()
}
