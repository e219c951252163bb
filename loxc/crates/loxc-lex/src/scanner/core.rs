//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, the per-scan state and the
//! single forward pass that drives token recognition.

use tracing::{debug, trace};

use crate::classify::{is_alpha, is_digit, is_whitespace};
use crate::config::ScannerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::Token;

/// Scanner for Lox source text.
///
/// A scanner owns a decoded copy of its input and is otherwise stateless:
/// every call to [`Scanner::scan`] starts from fresh state, so scanning the
/// same scanner twice yields identical results.
///
/// # Example
///
/// ```
/// use loxc_lex::{Scanner, TokenKind};
///
/// let tokens = Scanner::new("a != b").scan().unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::BangEqual, TokenKind::Identifier]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    /// Source decoded into code points.
    chars: Vec<char>,

    /// Rule options.
    config: ScannerConfig,
}

/// The line the scan loop is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineInfo {
    /// 1-based line number.
    pub number: usize,

    /// Code-point offset of the first character of the line.
    pub start: usize,
}

/// State threaded through one scan.
#[derive(Debug)]
struct ScanState {
    tokens: Vec<Token>,
    line: LineInfo,
    in_comment: bool,
    error: Option<LexError>,
}

impl ScanState {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            line: LineInfo {
                number: 1,
                start: 0,
            },
            in_comment: false,
            error: None,
        }
    }

    /// Returns true if `index` lies inside the most recently emitted token.
    fn is_consumed(&self, index: usize) -> bool {
        self.tokens
            .last()
            .map_or(false, |token| token.contains(index))
    }

    /// Moves bookkeeping to the line following the newline at `index`.
    fn new_line(&mut self, index: usize) {
        self.line = LineInfo {
            number: self.line.number + 1,
            start: index + 1,
        };
        self.in_comment = false;
    }

    fn finish(self) -> LexResult<Vec<Token>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.tokens),
        }
    }
}

impl Scanner {
    /// Creates a scanner with the default configuration.
    pub fn new(source: &str) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    /// Creates a scanner with the given configuration.
    pub fn with_config(source: &str, config: ScannerConfig) -> Self {
        Self {
            chars: source.chars().collect(),
            config,
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> ScannerConfig {
        self.config
    }

    /// Returns the number of code points in the source.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Scans the whole source.
    ///
    /// Returns every token in source order, or the first lexical error.
    /// No EOF token is appended.
    pub fn scan(&self) -> LexResult<Vec<Token>> {
        debug!(
            code_points = self.chars.len(),
            strict_keywords = self.config.strict_keywords,
            "scanning source"
        );

        let mut state = ScanState::new();
        for index in 0..self.chars.len() {
            self.step(&mut state, index);
        }

        match &state.error {
            Some(err) => debug!(line = err.line(), position = err.position(), "scan failed"),
            None => debug!(tokens = state.tokens.len(), lines = state.line.number, "scan finished"),
        }
        state.finish()
    }

    /// Makes the decision for a single position.
    ///
    /// The checks run in a fixed order: recorded error, consumed span,
    /// newline, comment or whitespace, comment start, and finally token
    /// recognition.
    fn step(&self, state: &mut ScanState, index: usize) {
        if state.error.is_some() || state.is_consumed(index) {
            return;
        }

        let c = self.chars[index];
        if c == '\n' {
            state.new_line(index);
            return;
        }
        if state.in_comment || is_whitespace(c) {
            return;
        }
        if self.is_comment_start(index) {
            state.in_comment = true;
            return;
        }

        match self.recognize(index, state.line) {
            Ok(token) => {
                trace!(kind = %token.kind, start = token.start, length = token.length, "token");
                state.tokens.push(token);
            },
            Err(err) => state.error = Some(err),
        }
    }

    /// Applies the lexical rules at `index`, first match wins.
    pub(crate) fn recognize(&self, index: usize, line: LineInfo) -> LexResult<Token> {
        let c = self.chars[index];

        if let Some(token) = self.lex_operator(index) {
            return Ok(token);
        }
        if c == '"' {
            return self.lex_string(index, line);
        }
        if is_digit(c) {
            return Ok(self.lex_number(index));
        }
        if let Some(token) = self.lex_keyword(index) {
            return Ok(token);
        }
        if is_alpha(c) {
            return Ok(self.lex_identifier(index));
        }

        Err(LexError::UnexpectedCharacter {
            found: c,
            line: line.number,
            context: self.line_context(line, index),
            position: index,
        })
    }

    /// Returns a cursor positioned at `index`.
    pub(crate) fn cursor_at(&self, index: usize) -> Cursor<'_> {
        Cursor::at(&self.chars, index)
    }

    /// Returns the text of the current line through `index` inclusive.
    pub(crate) fn line_context(&self, line: LineInfo, index: usize) -> String {
        self.cursor_at(line.start).slice(line.start, index + 1)
    }
}
