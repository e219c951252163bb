//! Common types and utilities for loxt commands.

use std::io::{self, Read, Write};
use std::path::Path;

use loxc_lex::Token;
use serde::Serialize;

use crate::error::{LoxtError, Result};

/// File name that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Display name used for standard input in diagnostics.
pub const STDIN_DISPLAY: &str = "<stdin>";

/// Token listing formats for `scan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `<start>:<length> <KIND> [text]` line per token.
    Text,
    /// A JSON array of token records.
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Like [`OutputFormat::from_str`] but reports unknown names as errors.
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| {
            LoxtError::Validation(format!(
                "{}: {} (expected text or json)",
                error_messages::UNSUPPORTED_FORMAT,
                s
            ))
        })
    }
}

/// Serializable view of a token for JSON output.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRecord<'a> {
    /// Kind name, e.g. `IDENTIFIER`.
    pub kind: &'static str,
    /// Text payload for identifiers, numbers and strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    /// Start offset in code points.
    pub start: usize,
    /// Length in code points.
    pub length: usize,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.as_str(),
            text: token.text(),
            start: token.start,
            length: token.length,
        }
    }
}

/// Writes one text line for `token`.
///
/// Control characters in the text are escaped, so a string literal that
/// spans lines still takes a single output line.
pub fn write_token_line<W: Write>(out: &mut W, token: &Token) -> io::Result<()> {
    write!(out, "{}:{} {}", token.start, token.length, token.kind.as_str())?;
    if let Some(text) = token.text() {
        write!(out, " {}", text.escape_debug())?;
    }
    writeln!(out)
}

/// A loaded source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name used in output and diagnostics.
    pub name: String,
    /// File contents.
    pub text: String,
}

/// Reads `path`, or standard input when `path` is `-`.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(SourceFile {
            name: STDIN_DISPLAY.to_string(),
            text,
        });
    }

    if !path.is_file() {
        return Err(LoxtError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_NOT_FOUND,
            path.display()
        )));
    }

    let text = std::fs::read_to_string(path)?;
    Ok(SourceFile {
        name: path.display().to_string(),
        text,
    })
}

/// Error message constants.
pub mod error_messages {
    /// Input file is missing or not a regular file.
    pub const INPUT_NOT_FOUND: &str = "Input file not found";
    /// Unknown `--format` value.
    pub const UNSUPPORTED_FORMAT: &str = "Unsupported output format";
}
