//! Lexical error types.

use thiserror::Error;

/// A lexical error. Scanning stops at the first one.
///
/// The `Display` output is the complete human-readable diagnostic: the
/// 1-based line number followed by the text of that line from its first
/// character through the offending position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A `"` with no closing quote before the end of input.
    #[error("Unterminated string starting at line {line}:\n\n   {context}")]
    UnterminatedString {
        /// Line of the opening quote.
        line: usize,
        /// Line text through the opening quote.
        context: String,
        /// Code-point offset of the opening quote.
        position: usize,
    },

    /// A character no lexical rule accepts.
    #[error("Unexpected character {found} at line {line}:\n\n   {context}")]
    UnexpectedCharacter {
        /// The rejected character.
        found: char,
        /// Line of the rejected character.
        line: usize,
        /// Line text through the rejected character.
        context: String,
        /// Code-point offset of the rejected character.
        position: usize,
    },
}

impl LexError {
    /// Returns the formatted diagnostic message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the 1-based line the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnterminatedString { line, .. } | LexError::UnexpectedCharacter { line, .. } => {
                *line
            },
        }
    }

    /// Returns the code-point offset that triggered the error.
    pub fn position(&self) -> usize {
        match self {
            LexError::UnterminatedString { position, .. }
            | LexError::UnexpectedCharacter { position, .. } => *position,
        }
    }

    /// Returns the line text embedded in the message.
    pub fn context(&self) -> &str {
        match self {
            LexError::UnterminatedString { context, .. }
            | LexError::UnexpectedCharacter { context, .. } => context,
        }
    }
}

/// Result type alias for scanning.
pub type LexResult<T> = std::result::Result<T, LexError>;
