//! Lox IR - tokens and expression trees.
//!
//! This crate holds the data the front end passes between phases:
//! - `Token`, `TokenKind` and `TokenList` produced by the scanner
//! - The keyword table used to reclassify identifier-shaped lexemes
//! - The `Expr` tree (binary, grouping, literal, unary)
//! - The `ExprVisitor` dispatch contract used by every tree traversal
//!
//! # Design
//!
//! The node set is closed and the visitor set is open: a new traversal is a
//! new `ExprVisitor` impl and never touches the node types, while a new node
//! variant forces every visitor to grow a handler (the compiler enforces it
//! through exhaustive matching in [`Expr::accept`]).

pub mod ast;
mod stack;
mod token;
pub mod visitor;

pub use ast::{Binary, Expr, Grouping, Literal, LiteralValue, Unary};
pub use stack::ensure_sufficient_stack;
pub use token::{classify, Token, TokenKind, TokenList, TokenLiteral};
pub use visitor::ExprVisitor;
