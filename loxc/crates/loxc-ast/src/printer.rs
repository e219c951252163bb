//! Prefix printer: renders an expression fully parenthesized.
//!
//! ```text
//! -123 * (45.67)   =>   (* (- 123) (group 45.67))
//! ```

use std::fmt;

use crate::expr::{BinaryExpr, Expr, UnaryExpr};

/// Renders `expr` in fully parenthesized prefix notation.
///
/// # Example
///
/// ```
/// use loxc_ast::{to_prefix_string, BinaryOp, Expr, UnaryOp};
///
/// let expr = Expr::binary(
///     Expr::unary(UnaryOp::Neg, Expr::number(123.0)),
///     BinaryOp::Mul,
///     Expr::grouping(Expr::number(45.67)),
/// );
/// assert_eq!(to_prefix_string(&expr), "(* (- 123) (group 45.67))");
/// ```
pub fn to_prefix_string(expr: &Expr) -> String {
    let mut output = String::new();
    PrefixPrinter::new(&mut output).print(expr);
    output
}

/// Writes expressions into a `String` buffer.
struct PrefixPrinter<'a> {
    output: &'a mut String,
}

impl<'a> PrefixPrinter<'a> {
    fn new(output: &'a mut String) -> Self {
        Self { output }
    }

    fn print(&mut self, expr: &Expr) {
        match expr {
            Expr::Number(value) => self.output.push_str(&value.to_string()),
            Expr::String(text) => self.output.push_str(text),
            Expr::Bool(true) => self.output.push_str("true"),
            Expr::Bool(false) => self.output.push_str("false"),
            Expr::Nil => self.output.push_str("nil"),
            Expr::Grouping(inner) => self.parenthesize("group", &[&**inner]),
            Expr::Unary(UnaryExpr { op, expr }) => self.parenthesize(op.as_str(), &[&**expr]),
            Expr::Binary(BinaryExpr { left, op, right }) => {
                self.parenthesize(op.as_str(), &[&**left, &**right])
            },
        }
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) {
        self.output.push('(');
        self.output.push_str(name);
        for expr in exprs {
            self.output.push(' ');
            self.print(expr);
        }
        self.output.push(')');
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_prefix_string(self))
    }
}
