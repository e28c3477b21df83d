//! Text buffer behind the toolbar's thickness field.

/// Single-line text field with keyboard focus tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThicknessField {
    text: String,
    focused: bool,
}

impl ThicknessField {
    /// Creates an unfocused field showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Drops focus; returns true if the field had it.
    pub fn blur(&mut self) -> bool {
        std::mem::replace(&mut self.focused, false)
    }

    /// Appends a character at the end of the text.
    pub fn insert(&mut self, c: char) {
        self.text.push(c);
    }

    /// Deletes the last character; returns false when already empty.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Replaces the whole text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}
