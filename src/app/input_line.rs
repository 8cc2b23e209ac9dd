//! Single-line text input with a character cursor and a length limit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable line of text. The cursor is a character index, not a byte index.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
    char_limit: usize,
}

impl TextInput {
    /// Create an empty input. A `char_limit` of 0 means unlimited.
    pub fn new(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the whole value (truncated to the limit) and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = self.clamp_to_limit(value, 0).to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert text at the cursor. Text beyond the limit is dropped.
    pub fn insert_str(&mut self, text: &str) {
        let text = self.clamp_to_limit(text, self.char_count());
        if text.is_empty() {
            return;
        }
        let at = self.byte_index(self.cursor);
        let inserted = text.chars().count();
        self.value.insert_str(at, text);
        self.cursor += inserted;
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Delete everything before the cursor.
    pub fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.value.replace_range(..at, "");
        self.cursor = 0;
    }

    /// Delete everything after the cursor.
    pub fn delete_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.value.truncate(at);
    }

    /// Delete the word before the cursor, including trailing spaces.
    pub fn delete_word_backward(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.value.replace_range(from..to, "");
        self.cursor = start;
    }

    /// Apply an editing key. Returns `true` if the value changed.
    ///
    /// Keys that are not editing keys are ignored and return `false`.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.value.len();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('a') => self.move_home(),
                KeyCode::Char('e') => self.move_end(),
                KeyCode::Char('u') => self.delete_to_start(),
                KeyCode::Char('k') => self.delete_to_end(),
                KeyCode::Char('w') => self.delete_word_backward(),
                _ => return false,
            }
            return self.value.len() != before;
        }

        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert_char(ch)
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }

        self.value.len() != before
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }

    /// Longest prefix of `text` that fits when `existing` chars are already present.
    fn clamp_to_limit<'a>(&self, text: &'a str, existing: usize) -> &'a str {
        if self.char_limit == 0 {
            return text;
        }
        let room = self.char_limit.saturating_sub(existing);
        match text.char_indices().nth(room) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_insert_and_cursor() {
        let mut input = TextInput::new(0);
        input.insert_str("héllo");
        assert_eq!(input.value(), "héllo");
        assert_eq!(input.cursor(), 5);

        input.move_left();
        input.move_left();
        input.insert_char('X');
        assert_eq!(input.value(), "hélXlo");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_backspace_and_delete_multibyte() {
        let mut input = TextInput::new(0);
        input.set_value("a😀b");
        input.backspace();
        assert_eq!(input.value(), "a😀");
        input.backspace();
        assert_eq!(input.value(), "a");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "");
        // No-ops at the boundaries
        input.backspace();
        input.delete();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_char_limit() {
        let mut input = TextInput::new(3);
        input.set_value("abcdef");
        assert_eq!(input.value(), "abc");
        input.insert_char('z');
        assert_eq!(input.value(), "abc");

        let mut input = TextInput::new(4);
        input.insert_str("ab");
        input.insert_str("日本語");
        assert_eq!(input.value(), "ab日本");
    }

    #[test]
    fn test_handle_key_reports_changes() {
        let mut input = TextInput::new(0);
        assert!(input.handle_key(key(KeyCode::Char('a'))));
        assert!(!input.handle_key(key(KeyCode::Left)));
        assert!(!input.handle_key(key(KeyCode::F(5))));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_control_editing() {
        let mut input = TextInput::new(0);
        input.set_value("hello big world");
        assert!(input.handle_key(ctrl('w')));
        assert_eq!(input.value(), "hello big ");

        input.handle_key(ctrl('a'));
        assert_eq!(input.cursor(), 0);
        input.move_right();
        assert!(input.handle_key(ctrl('k')));
        assert_eq!(input.value(), "h");

        input.set_value("abc");
        input.move_left();
        assert!(input.handle_key(ctrl('u')));
        assert_eq!(input.value(), "c");
        assert_eq!(input.cursor(), 0);
    }
}
