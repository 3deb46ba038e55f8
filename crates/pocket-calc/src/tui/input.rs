//! Keyboard input mapping

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Key;

/// What a terminal key event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Press a calculator key
    Press(Key),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps terminal key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> AppAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => AppAction::Quit,
                KeyCode::Char('u' | 'l') => AppAction::Press(Key::Clear),
                _ => AppAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => AppAction::Quit,
            KeyCode::Char('c' | 'C') => AppAction::Press(Key::Clear),
            KeyCode::Char('n' | '_') => AppAction::Press(Key::ToggleSign),
            KeyCode::Char(c) => Key::from_char(c).map_or(AppAction::None, AppAction::Press),
            KeyCode::Enter => AppAction::Press(Key::Equals),
            KeyCode::Esc => AppAction::Press(Key::Clear),
            KeyCode::Backspace | KeyCode::Delete => AppAction::Press(Key::Backspace),
            _ => AppAction::None,
        }
    }
}
