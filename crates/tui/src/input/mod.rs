//! Input processing for the terminal frontend.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Eq, PartialEq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Select the rating at the given icon index.
    Select(usize),
    /// Move the hover cursor left or right.
    MoveCursor(isize),
    /// Select the rating under the hover cursor.
    Confirm,
    /// Serialize and submit the form value.
    SubmitForm,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into page commands.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => KeyAction::MoveCursor(-1),
            KeyCode::Right => KeyAction::MoveCursor(1),
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        let ch = raw.to_ascii_lowercase();
        match ch {
            // Digit keys 1-5 map straight onto icon indices 0-4.
            '1'..='5' => KeyAction::Select(ch as usize - '1' as usize),
            'h' => KeyAction::MoveCursor(-1),
            'l' => KeyAction::MoveCursor(1),
            ' ' => KeyAction::Confirm,
            's' => KeyAction::SubmitForm,
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
