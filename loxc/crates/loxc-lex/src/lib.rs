//! loxc-lex - Lexical Scanner for the Lox Scripting Language
//!
//! This crate turns Lox source text into the ordered token sequence a
//! parser consumes.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan, Token, TokenKind};
//!
//! let tokens = scan("print \"hi\";").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::new(TokenKind::Print, 0, 5),
//!         Token::with_text(TokenKind::String, "hi", 6, 4),
//!         Token::new(TokenKind::Semicolon, 10, 1),
//!     ]
//! );
//!
//! let err = scan("$").unwrap_err();
//! assert_eq!(err.to_string(), "Unexpected character $ at line 1:\n\n   $");
//! ```
//!
//! # Module Structure
//!
//! - [`classify`] - Character predicates
//! - [`cursor`] - Code-point cursor for source traversal
//! - [`token`] - Token and token kind definitions
//! - [`scanner`] - The scan loop and lexical rules
//! - [`error`] - Lexical errors
//! - [`config`] - Scanner options
//!
//! # Lexical Rules
//!
//! At every position that is not whitespace, a comment, or already part of
//! a token, the rules below are tried in order and the first match wins:
//!
//! 1. `!=` `==` `<=` `>=`
//! 2. `( ) { } , . - + ; * /` and `! = < >`
//! 3. String literals `"..."` (no escapes, may span lines)
//! 4. Number literals `123`, `12.5`
//! 5. Keywords `and class else false for fun if nil or print return super
//!    this true var while`
//! 6. Identifiers `[A-Za-z_][A-Za-z0-9_]*`
//! 7. Anything else is an unexpected character
//!
//! Comments start with `//` and end at the newline. Scanning stops at the
//! first error. Positions and lengths are counted in code points.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod config;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::ScannerConfig;
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use scanner::Scanner;
pub use token::{keyword_from_ident, Token, TokenKind, KEYWORDS};

/// Scans `source` with the default configuration.
///
/// Returns the tokens in source order, or the first lexical error. Empty
/// input yields an empty vector.
pub fn scan(source: &str) -> LexResult<Vec<Token>> {
    Scanner::new(source).scan()
}

/// Scans `source` with an explicit configuration.
pub fn scan_with_config(source: &str, config: ScannerConfig) -> LexResult<Vec<Token>> {
    Scanner::with_config(source, config).scan()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    /// Unique identifier names, in order of first appearance.
    fn identifiers(tokens: &[Token]) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for token in tokens.iter().filter(|t| t.kind == TokenKind::Identifier) {
            let name = token.text().unwrap_or("");
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    #[test]
    fn test_grouping_and_operators_program() {
        let source = "
// this is a comment
(( )){} // grouping stuff
!*+-/=<> <= == // operators
";
        let expected = vec![
            Token::new(TokenKind::LeftParen, 22, 1),
            Token::new(TokenKind::LeftParen, 23, 1),
            Token::new(TokenKind::RightParen, 25, 1),
            Token::new(TokenKind::RightParen, 26, 1),
            Token::new(TokenKind::LeftBrace, 27, 1),
            Token::new(TokenKind::RightBrace, 28, 1),
            Token::new(TokenKind::Bang, 48, 1),
            Token::new(TokenKind::Star, 49, 1),
            Token::new(TokenKind::Plus, 50, 1),
            Token::new(TokenKind::Minus, 51, 1),
            Token::new(TokenKind::Slash, 52, 1),
            Token::new(TokenKind::Equal, 53, 1),
            Token::new(TokenKind::Less, 54, 1),
            Token::new(TokenKind::Greater, 55, 1),
            Token::new(TokenKind::LessEqual, 57, 2),
            Token::new(TokenKind::EqualEqual, 60, 2),
        ];
        assert_eq!(scan(source).unwrap(), expected);
    }

    #[test]
    fn test_hello_world_program() {
        let source = "
// Your first Lox program!
print \"Hello, world!\";
";
        assert_eq!(
            scan(source).unwrap(),
            vec![
                Token::new(TokenKind::Print, 28, 5),
                Token::with_text(TokenKind::String, "Hello, world!", 34, 15),
                Token::new(TokenKind::Semicolon, 49, 1),
            ]
        );
    }

    #[test]
    fn test_closure_program() {
        let source = "
fun addPair(a, b) {
  return a + b;
}

fun identity(a) {
  return a;
}

print identity(addPair)(1, 2); // Prints \"3\".
";
        let tokens = scan(source).unwrap();

        assert_eq!(identifiers(&tokens), ["addPair", "a", "b", "identity"]);
        assert_eq!(
            kinds(&tokens),
            [
                // First function
                TokenKind::Fun,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::Return,
                TokenKind::Identifier,
                TokenKind::Plus,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::RightBrace,
                // Second function
                TokenKind::Fun,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::Return,
                TokenKind::Identifier,
                TokenKind::Semicolon,
                TokenKind::RightBrace,
                // Print call
                TokenKind::Print,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::RightParen,
                TokenKind::LeftParen,
                TokenKind::Number,
                TokenKind::Comma,
                TokenKind::Number,
                TokenKind::RightParen,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_class_program() {
        let source = r#"
class Breakfast {
  cook() {
    print "Eggs a-fryin'!";
  }
}

var breakfast = Breakfast();
if (breakfast != nil and !false) breakfast.cook();
"#;
        let tokens = scan(source).unwrap();
        let kinds = kinds(&tokens);

        assert_eq!(kinds[0], TokenKind::Class);
        assert!(kinds.contains(&TokenKind::Var));
        assert!(kinds.contains(&TokenKind::If));
        assert!(kinds.contains(&TokenKind::BangEqual));
        assert!(kinds.contains(&TokenKind::Nil));
        assert!(kinds.contains(&TokenKind::And));
        assert!(kinds.contains(&TokenKind::False));
        assert!(kinds.contains(&TokenKind::Dot));
        assert_eq!(identifiers(&tokens), ["Breakfast", "cook", "breakfast"]);
    }

    #[test]
    fn test_unexpected_character_on_second_line() {
        let err = scan("*-\n*-*-*-*-*-$").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected character $ at line 2:\n\n   *-*-*-*-*-$"
        );
    }

    #[test]
    fn test_unexpected_first_character() {
        let err = scan("$").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected character $ at line 1:\n\n   $");
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(scan("  / ").unwrap(), vec![Token::new(TokenKind::Slash, 2, 1)]);
        assert_eq!(scan("\t/ ").unwrap(), vec![Token::new(TokenKind::Slash, 1, 1)]);
        assert_eq!(scan("\n\n/\n").unwrap(), vec![Token::new(TokenKind::Slash, 2, 1)]);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(scan(""), Ok(vec![]));
    }

    #[test]
    fn test_scan_with_config() {
        let strict = ScannerConfig::new().strict_keywords(true);
        assert_eq!(
            scan_with_config("orchid", strict).unwrap(),
            vec![Token::with_text(TokenKind::Identifier, "orchid", 0, 6)]
        );
        assert_eq!(
            kinds(&scan("orchid").unwrap()),
            [TokenKind::Or, TokenKind::Identifier]
        );
    }
}
