//! Terminal front end
//!
//! Keyboard keys and mouse clicks press keypad buttons; a quick left drag
//! across the display deletes the last character.

mod app;
mod grid;
mod input;
mod terminal;
mod ui;

pub use app::{CalculatorApp, TERMINAL_SWIPE};
pub use grid::TextGrid;
pub use input::{AppAction, InputHandler};
pub use terminal::run;
pub use ui::{draw, render, ScreenLayout, SCREEN_HEIGHT, SCREEN_WIDTH};
