//! Code entry buffer for terminals
//!
//! Append-only editing: characters go on the end, backspace takes one off.
//! Only printable ASCII and the space are accepted so the buffer length is
//! also its width in glyphs.

/// Longest code a terminal accepts
pub const MAX_CODE_CHARS: usize = 16;

/// Characters a terminal code may contain
pub fn is_code_char(ch: char) -> bool {
    ch.is_ascii_graphic() || ch == ' '
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeEntry {
    text: String,
}

impl CodeEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character. Returns false if it was rejected (not a code
    /// character, or the buffer is full).
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !is_code_char(ch) || self.text.len() >= MAX_CODE_CHARS {
            return false;
        }
        self.text.push(ch);
        true
    }

    /// Delete the last character
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }
}
