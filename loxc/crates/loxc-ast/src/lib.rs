//! loxc-ast - Expression Tree for the Lox Scripting Language
//!
//! A closed expression type (literals, grouping, unary and binary
//! operations) and a printer that renders it in fully parenthesized prefix
//! notation, the debugging format a parser's output is checked against.
//!
//! ```
//! use loxc_ast::{BinaryOp, Expr};
//!
//! let sum = Expr::binary(Expr::number(1.0), BinaryOp::Add, Expr::number(2.5));
//! assert_eq!(sum.to_string(), "(+ 1 2.5)");
//! ```

pub mod expr;
pub mod printer;

pub use expr::{BinaryExpr, BinaryOp, Expr, UnaryExpr, UnaryOp};
pub use printer::to_prefix_string;
