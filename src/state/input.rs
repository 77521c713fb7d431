//! Single-line query input.

/// Maximum number of characters a query may have.
pub const QUERY_CHAR_LIMIT: usize = 500;

/// Editable single-line text with a character cursor.
///
/// The cursor is a character index in `0..=len`, not a byte index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    value: String,
    cursor: usize,
    char_limit: usize,
}

impl Default for InputLine {
    fn default() -> Self {
        Self::new(QUERY_CHAR_LIMIT)
    }
}

impl InputLine {
    /// Create an empty input accepting at most `char_limit` characters.
    pub fn new(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit,
        }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the input holds no text.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Insert `c` at the cursor. Returns `false` when the limit is reached
    /// or `c` is a control character.
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() || self.char_count() >= self.char_limit {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor past the last character.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Empty the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}
