//! Prints expression trees in fully parenthesized prefix form.
//!
//! ```text
//! -123 * (45.67)   =>   (* (- 123) (group 45.67))
//! ```
//!
//! Every non-literal node opens exactly one pair of parentheses, so the
//! output mirrors the tree's shape and needs no precedence rules.

use std::fmt::{self, Write};

use lox_ir::{Binary, Expr, ExprVisitor, Grouping, Literal, Unary};

/// Renders an [`Expr`] as an S-expression string.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    /// Render `expr`.
    ///
    /// Fails only if writing to the output buffer fails.
    pub fn print(&mut self, expr: &Expr) -> Result<String, fmt::Error> {
        expr.accept(self)
    }

    /// `(name child child ...)`, each child rendered by dispatch.
    fn parenthesize(&mut self, name: &str, children: &[&Expr]) -> Result<String, fmt::Error> {
        let mut out = String::with_capacity(name.len() + 2);
        out.push('(');
        out.push_str(name);
        for child in children {
            write!(out, " {}", child.accept(self)?)?;
        }
        out.push(')');
        Ok(out)
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;
    type Error = fmt::Error;

    fn visit_binary(&mut self, expr: &Binary) -> Result<String, fmt::Error> {
        self.parenthesize(&expr.operator.lexeme, &[&*expr.left, &*expr.right])
    }

    fn visit_grouping(&mut self, expr: &Grouping) -> Result<String, fmt::Error> {
        self.parenthesize("group", &[&*expr.expression])
    }

    fn visit_literal(&mut self, expr: &Literal) -> Result<String, fmt::Error> {
        Ok(expr.value.to_string())
    }

    fn visit_unary(&mut self, expr: &Unary) -> Result<String, fmt::Error> {
        self.parenthesize(&expr.operator.lexeme, &[&*expr.right])
    }
}

/// Render `expr` with a fresh [`AstPrinter`].
pub fn print(expr: &Expr) -> Result<String, fmt::Error> {
    AstPrinter.print(expr)
}

#[cfg(test)]
mod tests;
