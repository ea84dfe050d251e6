#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Table,
    Modal,
}

/// Which input of the entry form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Hours,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Hours,
            FormField::Hours => FormField::Title,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Hours => "Hours",
        }
    }
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_follow_cursor() {
        let mut input = TextInput::from_str("Mth");
        input.move_left();
        input.move_left();
        input.insert('a');
        assert_eq!(input.value, "Math");
        assert_eq!(input.split_at_cursor(), ("Ma", "th"));

        input.backspace();
        assert_eq!(input.value, "Mth");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn cursor_moves_over_multibyte_chars() {
        let mut input = TextInput::from_str("合計");
        input.move_left();
        assert_eq!(input.cursor, 3);
        input.home();
        input.move_right();
        assert_eq!(input.cursor, 3);
        input.end();
        input.backspace();
        assert_eq!(input.value, "合");
    }

    #[test]
    fn field_focus_cycles() {
        assert_eq!(FormField::Title.next(), FormField::Hours);
        assert_eq!(FormField::Hours.next(), FormField::Title);
    }
}
