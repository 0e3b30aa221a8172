//! Single-line editable text buffer with a character cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of feeding a key to a [`TextInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    /// The text changed
    Changed,
    /// Only the cursor moved
    Moved,
    /// The key is not an editing key
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_pos(&self, char_pos: usize) -> usize {
        self.value.chars().take(char_pos).map(char::len_utf8).sum()
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor);
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor - 1);
        self.value.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.chars().count() {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor);
        self.value.remove(byte_pos);
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputEdit {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return InputEdit::Ignored;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.insert_char(c);
                InputEdit::Changed
            }
            KeyCode::Backspace => {
                if self.backspace() {
                    InputEdit::Changed
                } else {
                    InputEdit::Moved
                }
            }
            KeyCode::Delete => {
                if self.delete() {
                    InputEdit::Changed
                } else {
                    InputEdit::Moved
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputEdit::Moved
            }
            KeyCode::Right => {
                if self.cursor < self.value.chars().count() {
                    self.cursor += 1;
                }
                InputEdit::Moved
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputEdit::Moved
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                InputEdit::Moved
            }
            _ => InputEdit::Ignored,
        }
    }
}
