//! String literal lexing.
//!
//! Strings run from `"` to the next `"`. There are no escape sequences, and
//! a string may contain newlines.

use super::core::LineInfo;
use crate::error::{LexError, LexResult};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl Scanner {
    /// Lexes a string literal whose opening quote is at `start`.
    ///
    /// The token text excludes the quotes; the token length includes them.
    ///
    /// # Errors
    ///
    /// [`LexError::UnterminatedString`] if the input ends before a closing
    /// quote. The diagnostic quotes `line` through the opening quote.
    pub(crate) fn lex_string(&self, start: usize, line: LineInfo) -> LexResult<Token> {
        let mut cursor = self.cursor_at(start);
        cursor.advance();
        cursor.advance_while(|c| c != '"');

        if cursor.is_at_end() {
            return Err(LexError::UnterminatedString {
                line: line.number,
                context: self.line_context(line, start),
                position: start,
            });
        }

        let text = cursor.slice_from(start + 1);
        cursor.advance();
        Ok(Token::with_text(
            TokenKind::String,
            text,
            start,
            cursor.position() - start,
        ))
    }
}
