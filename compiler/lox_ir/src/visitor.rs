//! Expression visitor dispatch.
//!
//! A traversal implements [`ExprVisitor`]: one handler per node variant,
//! each returning `Result<Output, Error>`. [`Expr::accept`] matches on the
//! variant and calls the one handler that fits. Handlers recurse by calling
//! `accept` on child nodes, so a handler decides the traversal order and
//! whether to descend at all.
//!
//! Failures are the visitor's own `Error` type and pass through `accept`
//! untouched; the dispatch layer never wraps or translates them.
//!
//! # Example
//!
//! ```text
//! struct CountLiterals;
//!
//! impl ExprVisitor for CountLiterals {
//!     type Output = usize;
//!     type Error = Infallible;
//!
//!     fn visit_literal(&mut self, _: &Literal) -> Result<usize, Infallible> {
//!         Ok(1)
//!     }
//!     fn visit_grouping(&mut self, expr: &Grouping) -> Result<usize, Infallible> {
//!         expr.expression.accept(self)
//!     }
//!     // ... visit_binary, visit_unary
//! }
//! ```

use crate::ast::{Binary, Expr, Grouping, Literal, Unary};
use crate::stack::ensure_sufficient_stack;

/// A traversal over expression trees.
///
/// The tree is borrowed immutably for the whole walk; visitors may keep
/// whatever mutable state they need in `self`.
pub trait ExprVisitor {
    /// What each handler produces.
    type Output;
    /// What a failing handler reports.
    type Error;

    fn visit_binary(&mut self, expr: &Binary) -> Result<Self::Output, Self::Error>;

    fn visit_grouping(&mut self, expr: &Grouping) -> Result<Self::Output, Self::Error>;

    fn visit_literal(&mut self, expr: &Literal) -> Result<Self::Output, Self::Error>;

    fn visit_unary(&mut self, expr: &Unary) -> Result<Self::Output, Self::Error>;
}

impl Expr {
    /// Route to the handler matching this node's variant.
    ///
    /// Runs under [`ensure_sufficient_stack`], so a recursive traversal of a
    /// deep tree grows the stack instead of overflowing it. Dropping the tree
    /// is not covered: `Drop` for the nested `Box<Expr>` chain still recurses
    /// on the native stack.
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        ensure_sufficient_stack(|| match self {
            Expr::Binary(expr) => expr.accept(visitor),
            Expr::Grouping(expr) => expr.accept(visitor),
            Expr::Literal(expr) => expr.accept(visitor),
            Expr::Unary(expr) => expr.accept(visitor),
        })
    }
}

impl Binary {
    #[inline]
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_binary(self)
    }
}

impl Grouping {
    #[inline]
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_grouping(self)
    }
}

impl Literal {
    #[inline]
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_literal(self)
    }
}

impl Unary {
    #[inline]
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        visitor.visit_unary(self)
    }
}
