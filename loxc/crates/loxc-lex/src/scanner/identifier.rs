//! Keyword and identifier lexing.
//!
//! Keywords are tried before identifiers, as exact fixed-length matches
//! against the source. Unless [`ScannerConfig::strict_keywords`] is set, a
//! keyword does not need to end at a word boundary: `andor` is `AND OR`.
//!
//! [`ScannerConfig::strict_keywords`]: crate::ScannerConfig::strict_keywords

use crate::classify::is_alpha_numeric;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind, KEYWORDS};

impl Scanner {
    /// Lexes a reserved word at `start`, if one is spelled there.
    pub(crate) fn lex_keyword(&self, start: usize) -> Option<Token> {
        let cursor = self.cursor_at(start);
        KEYWORDS.iter().find_map(|&(word, kind)| {
            if !cursor.starts_with(word) {
                return None;
            }
            let length = word.chars().count();
            if self.config().strict_keywords && is_alpha_numeric(cursor.peek_char(length)) {
                return None;
            }
            Some(Token::new(kind, start, length))
        })
    }

    /// Lexes an identifier: the maximal alphanumeric run from `start`.
    pub(crate) fn lex_identifier(&self, start: usize) -> Token {
        let mut cursor = self.cursor_at(start);
        cursor.advance_while(is_alpha_numeric);
        Token::with_text(
            TokenKind::Identifier,
            cursor.slice_from(start),
            start,
            cursor.position() - start,
        )
    }
}
