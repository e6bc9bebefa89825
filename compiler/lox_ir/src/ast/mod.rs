//! Expression tree nodes.
//!
//! Four variants, each a plain struct, wrapped by [`Expr`]. A node owns its
//! children outright (`Box<Expr>`), so a tree is always a tree: no sharing,
//! no cycles. Nodes have no mutating API; once built, a tree can be walked
//! any number of times by any number of visitors.

use std::convert::Infallible;
use std::fmt;

use crate::token::{Token, TokenLiteral};
use crate::visitor::ExprVisitor;

/// `left operator right`
#[derive(Clone, Debug, PartialEq)]
pub struct Binary {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// `( expression )`
#[derive(Clone, Debug, PartialEq)]
pub struct Grouping {
    pub expression: Box<Expr>,
}

/// A constant. `LiteralValue::Nil` is the language's `nil`.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
}

/// `operator right`
#[derive(Clone, Debug, PartialEq)]
pub struct Unary {
    pub operator: Token,
    pub right: Box<Expr>,
}

/// An expression: the closed union of node variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Binary(Binary),
    Grouping(Grouping),
    Literal(Literal),
    Unary(Unary),
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary(Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    pub fn grouping(expression: Expr) -> Self {
        Expr::Grouping(Grouping {
            expression: Box::new(expression),
        })
    }

    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Expr::Literal(Literal {
            value: value.into(),
        })
    }

    pub fn nil() -> Self {
        Expr::Literal(Literal {
            value: LiteralValue::Nil,
        })
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary(Unary {
            operator,
            right: Box::new(right),
        })
    }

    /// Number of nodes on the longest root-to-leaf path. A lone literal has
    /// depth 1.
    pub fn depth(&self) -> usize {
        match self.accept(&mut DepthCounter) {
            Ok(depth) => depth,
            Err(never) => match never {},
        }
    }
}

/// Computes [`Expr::depth`].
struct DepthCounter;

impl ExprVisitor for DepthCounter {
    type Output = usize;
    type Error = Infallible;

    fn visit_binary(&mut self, expr: &Binary) -> Result<usize, Infallible> {
        let left = expr.left.accept(self)?;
        let right = expr.right.accept(self)?;
        Ok(1 + left.max(right))
    }

    fn visit_grouping(&mut self, expr: &Grouping) -> Result<usize, Infallible> {
        Ok(1 + expr.expression.accept(self)?)
    }

    fn visit_literal(&mut self, _expr: &Literal) -> Result<usize, Infallible> {
        Ok(1)
    }

    fn visit_unary(&mut self, expr: &Unary) -> Result<usize, Infallible> {
        Ok(1 + expr.right.accept(self)?)
    }
}

/// Value held by a [`Literal`] node.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Nil => f.write_str("nil"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<TokenLiteral> for LiteralValue {
    fn from(literal: TokenLiteral) -> Self {
        match literal {
            TokenLiteral::Str(s) => LiteralValue::Str(s),
            TokenLiteral::Number(n) => LiteralValue::Number(n),
        }
    }
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        LiteralValue::Bool(b)
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        LiteralValue::Str(s.to_owned())
    }
}

impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        LiteralValue::Str(s)
    }
}
