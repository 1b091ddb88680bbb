//! Key-level input handling.
//!
//! Non-digit keys are dropped before they ever reach the input buffer, except for the
//! editing and navigation keys. This is only a convenience: whatever ends up in the
//! buffer is still digit-filtered by the session.

/// A key event, independent of the terminal library that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward the key to the input line.
    Accept,
    /// Drop the key.
    Suppress,
    /// Leave the typing screen.
    Back,
}

pub fn classify(key: KeyPress) -> KeyAction {
    match key {
        KeyPress::Char(c) if c.is_ascii_digit() => KeyAction::Accept,
        KeyPress::Backspace
        | KeyPress::Delete
        | KeyPress::Tab
        | KeyPress::Left
        | KeyPress::Right
        | KeyPress::Up
        | KeyPress::Down => KeyAction::Accept,
        KeyPress::Escape => KeyAction::Back,
        KeyPress::Enter | KeyPress::Char(_) | KeyPress::Other => KeyAction::Suppress,
    }
}

/// An editable single-line buffer with a cursor, counted in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    chars: Vec<char>,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a key and reports whether the buffer content changed.
    pub fn apply(&mut self, key: KeyPress) -> bool {
        if classify(key) != KeyAction::Accept {
            return false;
        }
        match key {
            KeyPress::Char(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
                true
            }
            KeyPress::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
                true
            }
            KeyPress::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
                true
            }
            KeyPress::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyPress::Right => {
                self.cursor = (self.cursor + 1).min(self.chars.len());
                false
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
