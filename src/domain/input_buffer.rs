//! Text buffer behind the chat input field.

/// Upper bound on the number of characters a single message may hold.
const MAX_INPUT_CHARS: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputBuffer {
    text: String,
    /// Cursor as a character index into `text`.
    cursor: usize,
}

impl InputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The buffer contents without leading or trailing whitespace.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Text before the cursor, used to place the terminal cursor.
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.byte_offset(self.cursor)]
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts `ch` at the cursor. Returns false once the buffer is full.
    pub fn insert(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_CHARS {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Inserts pasted text up to the capacity limit. Line breaks become spaces.
    pub fn insert_str(&mut self, pasted: &str) {
        for ch in pasted.chars() {
            let ch = if ch == '\n' || ch == '\r' { ' ' } else { ch };
            if !self.insert(ch) {
                break;
            }
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.remove_at_cursor();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn remove_at_cursor(&mut self) {
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }
}
