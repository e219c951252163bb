//! Code-point cursor for traversing source text.
//!
//! The scanner measures every position in Unicode code points rather than
//! bytes, so the cursor walks a pre-decoded `&[char]` instead of a `&str`.
//! Offsets reported by [`Cursor::position`] are therefore stable across
//! non-ASCII source.

/// A cursor over a slice of code points.
///
/// The cursor never moves past the end of its input. Reads past the end
/// yield `'\0'`, which no lexical rule accepts.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let chars: Vec<char> = "a=b".chars().collect();
/// let mut cursor = Cursor::new(&chars);
///
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '=');
/// assert_eq!(cursor.peek_char(1), 'b');
/// assert_eq!(cursor.peek_char(2), '\0');
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    /// The decoded source being traversed.
    chars: &'a [char],

    /// Current code-point offset.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `chars`.
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars, position: 0 }
    }

    /// Creates a cursor positioned at `position`, clamped to the input length.
    pub fn at(chars: &'a [char], position: usize) -> Self {
        Self {
            chars,
            position: position.min(chars.len()),
        }
    }

    /// Returns the character under the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` code points ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let chars: Vec<char> = "λx".chars().collect();
    /// let cursor = Cursor::new(&chars);
    /// assert_eq!(cursor.peek_char(0), 'λ');
    /// assert_eq!(cursor.peek_char(1), 'x');
    /// assert_eq!(cursor.peek_char(5), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.chars
            .get(self.position + offset)
            .copied()
            .unwrap_or('\0')
    }

    /// Advances by one code point. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    /// Advances by up to `count` code points.
    pub fn advance_n(&mut self, count: usize) {
        self.position = (self.position + count).min(self.chars.len());
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let chars: Vec<char> = "123abc".chars().collect();
    /// let mut cursor = Cursor::new(&chars);
    /// cursor.advance_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.position(), 3);
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.position += 1;
        }
    }

    /// Consumes `expected` if it is the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let chars: Vec<char> = "!=".chars().collect();
    /// let mut cursor = Cursor::new(&chars);
    /// assert!(cursor.match_char('!'));
    /// assert!(!cursor.match_char('!'));
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Returns true if the input at the cursor starts with `text`.
    pub fn starts_with(&self, text: &str) -> bool {
        let mut offset = 0;
        for expected in text.chars() {
            match self.chars.get(self.position + offset) {
                Some(&c) if c == expected => offset += 1,
                _ => return false,
            }
        }
        true
    }

    /// Returns true if the cursor is at the end of the input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Returns the current code-point offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Collects the code points in `start..end` into a `String`.
    ///
    /// Bounds are clamped to the input.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Collects the code points from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> String {
        self.slice(start, self.position)
    }

    /// Returns the full input.
    pub fn chars(&self) -> &'a [char] {
        self.chars
    }
}
