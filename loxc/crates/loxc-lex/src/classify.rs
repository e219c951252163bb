//! Character classification for the Lox scanner.
//!
//! Every lexical rule is expressed in terms of these four predicates. The
//! scanner walks the source one code point at a time, but only ASCII
//! letters, digits and whitespace carry meaning; any other code point is an
//! unexpected character.

/// Checks if a character is a decimal digit (`0`-`9`).
///
/// # Example
///
/// ```
/// use loxc_lex::classify::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// assert!(!is_digit('٣')); // Arabic-Indic digit three
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can start an identifier.
///
/// Valid start characters are ASCII letters and the underscore.
///
/// # Example
///
/// ```
/// use loxc_lex::classify::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('Z'));
/// assert!(is_alpha('_'));
/// assert!(!is_alpha('1'));
/// assert!(!is_alpha('α'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use loxc_lex::classify::is_alpha_numeric;
///
/// assert!(is_alpha_numeric('a'));
/// assert!(is_alpha_numeric('_'));
/// assert!(is_alpha_numeric('7'));
/// assert!(!is_alpha_numeric('-'));
/// ```
#[inline]
pub fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Checks if a character is insignificant whitespace.
///
/// Only space, tab, carriage return and line feed qualify. Other Unicode
/// whitespace is reported as an unexpected character.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
