//! Terminal application state

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use super::input::AppAction;
use super::ui::ScreenLayout;
use crate::core::{Calculator, DisplaySnapshot, Key};
use crate::driver::CalculatorDriver;
use crate::gesture::{Point, SwipeConfig, SwipeRecognizer};
use crate::keypad::Keypad;

/// Swipe thresholds in terminal cells: 10 cells per second, one row of drift
pub const TERMINAL_SWIPE: SwipeConfig = SwipeConfig {
    velocity_threshold: 0.01,
    directional_offset_threshold: 2.0,
};

/// A drag that started over the display
#[derive(Debug, Clone, Copy)]
struct Drag {
    start: Point,
    at: Instant,
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    calc: Calculator,
    keypad: Keypad,
    layout: ScreenLayout,
    recognizer: SwipeRecognizer,
    drag: Option<Drag>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a calculator app with terminal swipe thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::with_swipe_config(TERMINAL_SWIPE)
    }

    /// Creates a calculator app with custom swipe thresholds
    #[must_use]
    pub fn with_swipe_config(config: SwipeConfig) -> Self {
        Self {
            calc: Calculator::new(),
            keypad: Keypad::new(),
            layout: ScreenLayout::new(),
            recognizer: SwipeRecognizer::with_config(config),
            drag: None,
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Returns the keypad (with highlight state)
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the screen layout
    #[must_use]
    pub fn layout(&self) -> ScreenLayout {
        self.layout
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a key and lights its button
    pub fn press(&mut self, key: Key) {
        self.calc.press(key);
        self.keypad.highlight(key);
    }

    /// Applies a mapped keyboard action
    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Press(key) => self.press(key),
            AppAction::Quit => self.quit(),
            AppAction::None => {}
        }
    }

    /// Presses the keypad button under (`x`, `y`), if any
    ///
    /// Returns the key that was pressed.
    pub fn click(&mut self, x: u16, y: u16) -> Option<Key> {
        let index = self.keypad.hit_test(self.layout.keypad, x, y)?;
        let key = self.keypad.get_button(index)?.key;
        self.press(key);
        Some(key)
    }

    /// Starts tracking a drag if it begins over the display
    pub fn begin_drag(&mut self, x: u16, y: u16, at: Instant) {
        self.drag = self.layout.display.contains(x, y).then(|| Drag {
            start: Point::new(f64::from(x), f64::from(y)),
            at,
        });
    }

    /// Finishes a drag; a left swipe over the display deletes one character
    ///
    /// Returns the key the gesture produced.
    pub fn end_drag(&mut self, x: u16, y: u16, at: Instant) -> Option<Key> {
        let drag = self.drag.take()?;
        let elapsed_ms = at.saturating_duration_since(drag.at).as_secs_f64() * 1000.0;
        let end = Point::new(f64::from(x), f64::from(y));
        let direction = self.recognizer.recognize(drag.start, end, elapsed_ms)?;
        debug!(?direction, elapsed_ms, "swipe on display");
        let key = direction.display_key()?;
        self.calc.press(key);
        Some(key)
    }

    /// Returns true while a display drag is in progress
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Routes a mouse event: clicks press buttons, drags over the display
    /// are swipe candidates
    pub fn handle_mouse(&mut self, event: MouseEvent, at: Instant) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.layout.display.contains(event.column, event.row) {
                    self.begin_drag(event.column, event.row, at);
                } else {
                    self.click(event.column, event.row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.end_drag(event.column, event.row, at);
            }
            _ => {}
        }
    }
}

impl CalculatorDriver for CalculatorApp {
    fn press(&mut self, key: Key) {
        CalculatorApp::press(self, key);
    }

    fn primary(&self) -> String {
        self.calc.primary().to_string()
    }

    fn secondary(&self) -> String {
        self.calc.secondary().to_string()
    }

    fn clear(&mut self) {
        CalculatorApp::press(self, Key::Clear);
    }

    fn snapshot(&self) -> DisplaySnapshot {
        self.calc.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::driver::run_all_scenarios;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app_with(keys: &str) -> CalculatorApp {
        let mut app = CalculatorApp::new();
        for key in crate::core::parse_sequence(keys).unwrap() {
            app.press(key);
        }
        app
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.calculator().primary(), "0");
        assert!(!app.should_quit());
        assert!(!app.is_dragging());
        assert_eq!(app.keypad().pressed(), None);
    }

    #[test]
    fn test_app_runs_all_scenarios() {
        let mut app = CalculatorApp::new();
        run_all_scenarios(&mut app);
    }

    #[test]
    fn test_press_highlights_button() {
        let app = app_with("7");
        assert_eq!(app.keypad().pressed(), app.keypad().find_button(Key::Digit(7)));
    }

    #[test]
    fn test_handle_action() {
        let mut app = CalculatorApp::new();
        app.handle_action(AppAction::Press(Key::Digit(3)));
        app.handle_action(AppAction::None);
        assert_eq!(app.calculator().primary(), "3");
        app.handle_action(AppAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_on_keypad() {
        let mut app = CalculatorApp::new();
        let keypad = app.layout().keypad;
        // Top-left cell of the keypad is AC; row 1 column 0 is 7
        assert_eq!(app.click(keypad.x, keypad.y + 2), Some(Key::Digit(7)));
        assert_eq!(app.calculator().primary(), "7");
        assert_eq!(app.click(0, 0), None);
    }

    #[test]
    fn test_left_swipe_on_display_deletes() {
        let mut app = app_with("1 2 3");
        let row = app.layout().primary_row();
        let start = Instant::now();
        app.begin_drag(25, row, start);
        assert!(app.is_dragging());
        let key = app.end_drag(5, row, start + Duration::from_millis(200));
        assert_eq!(key, Some(Key::Backspace));
        assert_eq!(app.calculator().primary(), "12");
        assert!(!app.is_dragging());
    }

    #[test]
    fn test_right_swipe_does_nothing() {
        let mut app = app_with("1 2 3");
        let row = app.layout().primary_row();
        let start = Instant::now();
        app.begin_drag(5, row, start);
        assert_eq!(app.end_drag(25, row, start + Duration::from_millis(200)), None);
        assert_eq!(app.calculator().primary(), "123");
    }

    #[test]
    fn test_slow_drag_does_nothing() {
        let mut app = app_with("1 2 3");
        let row = app.layout().primary_row();
        let start = Instant::now();
        app.begin_drag(25, row, start);
        assert_eq!(app.end_drag(20, row, start + Duration::from_secs(5)), None);
        assert_eq!(app.calculator().primary(), "123");
    }

    #[test]
    fn test_drag_outside_display_is_ignored() {
        let mut app = app_with("1 2 3");
        let start = Instant::now();
        app.begin_drag(25, 12, start);
        assert!(!app.is_dragging());
        assert_eq!(app.end_drag(5, 12, start + Duration::from_millis(100)), None);
    }

    #[test]
    fn test_mouse_events() {
        let mut app = app_with("4 5");
        let row = app.layout().primary_row();
        let start = Instant::now();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 26, row), start);
        app.handle_mouse(
            mouse(MouseEventKind::Up(MouseButton::Left), 4, row),
            start + Duration::from_millis(150),
        );
        assert_eq!(app.calculator().primary(), "4");

        let keypad = app.layout().keypad;
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), keypad.x, keypad.y), start);
        assert_eq!(app.calculator().primary(), "0");

        app.handle_mouse(mouse(MouseEventKind::Moved, 3, 3), start);
        assert_eq!(app.calculator().primary(), "0");
    }
}
