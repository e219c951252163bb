//! Expression tree.

use loxc_lex::TokenKind;

/// Expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Number literal
    Number(f64),

    /// String literal
    String(String),

    /// `true` or `false`
    Bool(bool),

    /// `nil`
    Nil,

    /// Parenthesized expression
    Grouping(Box<Expr>),

    /// Unary operation
    Unary(UnaryExpr),

    /// Binary operation
    Binary(BinaryExpr),
}

/// Unary expression
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
}

/// Binary expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: BinaryOp,
    pub right: Box<Expr>,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Negation `-`
    Neg,

    /// Logical not `!`
    Not,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
}

impl UnaryOp {
    /// Source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }

    /// Maps a scanner token kind to a prefix operator.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// Maps a scanner token kind to an infix operator.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::EqualEqual => BinaryOp::Eq,
            TokenKind::BangEqual => BinaryOp::Ne,
            TokenKind::Less => BinaryOp::Lt,
            TokenKind::LessEqual => BinaryOp::Le,
            TokenKind::Greater => BinaryOp::Gt,
            TokenKind::GreaterEqual => BinaryOp::Ge,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            _ => return None,
        };
        Some(op)
    }
}

impl Expr {
    /// Number literal.
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    /// String literal.
    pub fn string(value: impl Into<String>) -> Self {
        Expr::String(value.into())
    }

    /// Parenthesized expression.
    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    /// Prefix operation.
    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            op,
            expr: Box::new(expr),
        })
    }

    /// Infix operation.
    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    /// Returns true for literal leaves.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expr::Number(_) | Expr::String(_) | Expr::Bool(_) | Expr::Nil
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_ops_from_tokens() {
        let cases = [
            (TokenKind::EqualEqual, "=="),
            (TokenKind::BangEqual, "!="),
            (TokenKind::Less, "<"),
            (TokenKind::LessEqual, "<="),
            (TokenKind::Greater, ">"),
            (TokenKind::GreaterEqual, ">="),
            (TokenKind::Plus, "+"),
            (TokenKind::Minus, "-"),
            (TokenKind::Star, "*"),
            (TokenKind::Slash, "/"),
        ];
        for (kind, spelling) in cases {
            let op = BinaryOp::from_token_kind(kind).unwrap();
            assert_eq!(op.as_str(), spelling);
            assert_eq!(kind.lexeme(), Some(spelling));
        }
        assert_eq!(BinaryOp::from_token_kind(TokenKind::Bang), None);
        assert_eq!(BinaryOp::from_token_kind(TokenKind::And), None);
    }

    #[test]
    fn test_unary_ops_from_tokens() {
        assert_eq!(UnaryOp::from_token_kind(TokenKind::Minus), Some(UnaryOp::Neg));
        assert_eq!(UnaryOp::from_token_kind(TokenKind::Bang), Some(UnaryOp::Not));
        assert_eq!(UnaryOp::from_token_kind(TokenKind::Plus), None);
    }

    #[test]
    fn test_is_literal() {
        assert!(Expr::Nil.is_literal());
        assert!(Expr::number(1.0).is_literal());
        assert!(!Expr::grouping(Expr::Nil).is_literal());
    }
}
