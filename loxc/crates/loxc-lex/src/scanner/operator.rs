//! Operator and punctuation lexing.
//!
//! Two-character operators are tried before their one-character prefixes:
//! each `lex_*` helper consumes the first character and then looks for a
//! trailing `=`.

use crate::cursor::Cursor;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl Scanner {
    /// Lexes punctuation or an operator at `start`.
    ///
    /// Returns `None` if the character there is not an operator. A `/` is
    /// always a SLASH here; comments are filtered out before this is called.
    pub(crate) fn lex_operator(&self, start: usize) -> Option<Token> {
        let mut cursor = self.cursor_at(start);
        let kind = match cursor.current_char() {
            '!' => lex_bang(&mut cursor),
            '=' => lex_equal(&mut cursor),
            '<' => lex_less(&mut cursor),
            '>' => lex_greater(&mut cursor),
            c => {
                let kind = single_char_kind(c)?;
                cursor.advance();
                kind
            },
        };
        Some(Token::new(kind, start, cursor.position() - start))
    }
}

/// Maps single-character punctuation to its kind.
fn single_char_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '-' => TokenKind::Minus,
        '+' => TokenKind::Plus,
        ';' => TokenKind::Semicolon,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        _ => return None,
    };
    Some(kind)
}

/// Lexes bang or not-equals.
///
/// Handles: `!`, `!=`
fn lex_bang(cursor: &mut Cursor<'_>) -> TokenKind {
    cursor.advance();
    if cursor.match_char('=') {
        TokenKind::BangEqual
    } else {
        TokenKind::Bang
    }
}

/// Lexes equals or equals-equals.
///
/// Handles: `=`, `==`
fn lex_equal(cursor: &mut Cursor<'_>) -> TokenKind {
    cursor.advance();
    if cursor.match_char('=') {
        TokenKind::EqualEqual
    } else {
        TokenKind::Equal
    }
}

/// Lexes less or less-equals.
///
/// Handles: `<`, `<=`
fn lex_less(cursor: &mut Cursor<'_>) -> TokenKind {
    cursor.advance();
    if cursor.match_char('=') {
        TokenKind::LessEqual
    } else {
        TokenKind::Less
    }
}

/// Lexes greater or greater-equals.
///
/// Handles: `>`, `>=`
fn lex_greater(cursor: &mut Cursor<'_>) -> TokenKind {
    cursor.advance();
    if cursor.match_char('=') {
        TokenKind::GreaterEqual
    } else {
        TokenKind::Greater
    }
}
