//! Number literal lexing.
//!
//! A number is a run of digits, optionally followed by a `.` and another run
//! of digits. The dot is only taken when a digit follows it, so a trailing
//! or second dot is left for the next token:
//!
//! - `1234.` is NUMBER `1234` then DOT
//! - `.1234` is DOT then NUMBER `1234`
//! - `1.1.1` is NUMBER `1.1`, DOT, NUMBER `1`

use crate::classify::is_digit;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl Scanner {
    /// Lexes a number literal whose first digit is at `start`.
    ///
    /// The token text is the exact lexeme; no numeric conversion happens
    /// here.
    pub(crate) fn lex_number(&self, start: usize) -> Token {
        let mut cursor = self.cursor_at(start);
        cursor.advance_while(is_digit);

        if cursor.current_char() == '.' && is_digit(cursor.peek_char(1)) {
            cursor.advance();
            cursor.advance_while(is_digit);
        }

        Token::with_text(
            TokenKind::Number,
            cursor.slice_from(start),
            start,
            cursor.position() - start,
        )
    }
}
