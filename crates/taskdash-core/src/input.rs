//! Single-line text buffer with a byte cursor, used by every form field
//! and search box in the dashboard.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.len();
        Self { buffer, cursor }
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.len();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// True when the buffer holds only whitespace, which forms treat as missing.
    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    /// Cursor position in characters, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut input = InputState::new();
        for c in "tsk".chars() {
            input.insert_char(c);
        }
        input.move_left();
        input.move_left();
        input.insert_char('a');
        assert_eq!(input.as_str(), "task");
        assert_eq!(input.cursor_pos(), 2);
    }

    #[test]
    fn test_with_text_places_cursor_at_end() {
        let input = InputState::with_text("Alpha");
        assert_eq!(input.cursor_pos(), 5);
        assert_eq!(input.cursor_column(), 5);
    }

    #[test]
    fn test_backspace_and_delete_at_edges_are_noops() {
        let mut input = InputState::new();
        input.backspace();
        input.delete();
        assert!(input.is_empty());

        input.set("ab");
        input.delete();
        assert_eq!(input.as_str(), "ab");
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "ab");
    }

    #[test]
    fn test_delete_removes_char_under_cursor() {
        let mut input = InputState::with_text("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "bc");
        assert_eq!(input.cursor_pos(), 0);
    }

    #[test]
    fn test_multibyte_navigation() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('\u{00e9}');
        input.insert_char('\u{4e16}');
        assert_eq!(input.cursor_pos(), 6);
        assert_eq!(input.cursor_column(), 3);

        input.move_left();
        assert_eq!(input.cursor_pos(), 3);
        input.backspace();
        assert_eq!(input.as_str(), "a\u{4e16}");
        assert_eq!(input.cursor_pos(), 1);

        input.move_right();
        assert_eq!(input.cursor_pos(), 4);
        input.move_right();
        assert_eq!(input.cursor_pos(), 4);
    }

    #[test]
    fn test_blank_detection() {
        assert!(InputState::with_text("   ").is_blank());
        assert!(!InputState::with_text("   ").is_empty());
        assert!(!InputState::with_text(" x ").is_blank());
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = InputState::with_text("hello");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_pos(), 0);
    }
}
