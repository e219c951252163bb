//! Scanner module.
//!
//! The scanner is split into focused components:
//! - `core` - Scanner struct, scan state and the forward scan loop
//! - `comment` - Line comment detection
//! - `operator` - Punctuation and one/two character operators
//! - `string` - String literals
//! - `number` - Number literals
//! - `identifier` - Keywords and identifiers

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
