//! Editable text field state
//!
//! The cursor counts characters, not bytes, so currency symbols and other
//! multi-byte input edit correctly.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    cursor: usize,
    pub label: String,
    pub placeholder: String,
    /// Input beyond this many characters is ignored
    pub max_len: Option<usize>,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set(content);
        self
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, c: char) {
        if self.max_len.is_some_and(|max| self.char_len() >= max) {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut input = TextInput::new("Amount");
        for c in "150".chars() {
            input.insert(c);
        }
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "10");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new("Note").content("₹50");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "50");
        input.move_end();
        input.insert('€');
        assert_eq!(input.value(), "50€");
    }

    #[test]
    fn test_max_len() {
        let mut input = TextInput::new("Code").max_len(6);
        for c in "12345678".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "123456");
    }
}
