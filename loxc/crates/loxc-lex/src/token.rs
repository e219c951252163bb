//! Token definitions for the Lox scanner.

use std::fmt;

/// The closed set of token kinds.
///
/// Names render in SCREAMING_SNAKE_CASE through [`TokenKind::as_str`] and
/// `Display`, matching the names diagnostics and the CLI print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End of input. Part of the vocabulary for parsers; `scan` never emits it.
    Eof,
}

impl TokenKind {
    /// Returns the canonical upper-case name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns the fixed source spelling of punctuation, operators and
    /// keywords, or `None` for literals and EOF.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Identifier | TokenKind::String | TokenKind::Number | TokenKind::Eof => {
                return None
            },
            keyword => return KEYWORDS.iter().find(|(_, k)| *k == keyword).map(|(s, _)| *s),
        };
        Some(text)
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|(_, k)| *k == self)
    }

    /// Returns true for kinds whose tokens carry literal text.
    pub fn has_text(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::String | TokenKind::Number
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words in the order the scanner tries them.
///
/// Matching is an exact comparison against the source at the current
/// position, so the order only matters for words sharing a prefix.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

/// Looks up the keyword kind for a complete identifier.
///
/// # Example
///
/// ```
/// use loxc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident("whilst"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map(|(_, kind)| *kind)
}

/// A single token produced by the scanner.
///
/// `start` and `length` are measured in code points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,

    /// Literal content for identifiers, strings (without quotes) and numbers.
    pub text: Option<String>,

    /// Offset of the first code point of the lexeme.
    pub start: usize,

    /// Number of code points in the lexeme.
    pub length: usize,
}

impl Token {
    /// Creates a token without literal text.
    pub fn new(kind: TokenKind, start: usize, length: usize) -> Self {
        Self {
            kind,
            text: None,
            start,
            length,
        }
    }

    /// Creates a token carrying literal text.
    pub fn with_text(kind: TokenKind, text: impl Into<String>, start: usize, length: usize) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            start,
            length,
        }
    }

    /// Offset one past the last code point of the lexeme.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Returns true if `position` lies inside this token's span.
    pub fn contains(&self, position: usize) -> bool {
        position >= self.start && position < self.end()
    }

    /// Returns the literal text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} {:?} @{}+{}", self.kind, text, self.start, self.length),
            None => write!(f, "{} @{}+{}", self.kind, self.start, self.length),
        }
    }
}
