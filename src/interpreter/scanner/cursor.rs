/// A scan position over an expression text.
///
/// The cursor holds the text and a byte offset into it. The offset only moves
/// forward and always stays on a character boundary between `0` and the
/// length of the text. A cursor lives for the duration of one parse.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text:     &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    /// Current byte offset into the text.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The unscanned remainder of the text.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    /// The character at the cursor, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the character at the cursor.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes the character at the cursor if it equals `expected`.
    ///
    /// Returns whether the character was consumed.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += expected.len_utf8();
            return true;
        }
        false
    }

    /// Advances past whitespace.
    ///
    /// Stops at the end of the text or at the first non-whitespace character.
    /// Never fails.
    ///
    /// # Example
    /// ```
    /// use duocalc::interpreter::scanner::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("  \t12");
    /// cursor.skip_blanks();
    /// assert_eq!(cursor.position(), 3);
    /// assert_eq!(cursor.peek(), Some('1'));
    /// ```
    pub fn skip_blanks(&mut self) {
        while let Some(c) = self.peek()
              && c.is_whitespace()
        {
            self.position += c.len_utf8();
        }
    }
}
