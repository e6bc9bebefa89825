//! Diagnostic collection and reporting for the Lox front end.
//!
//! Front-end phases never abort on a bad input. They hand each problem to a
//! [`DiagnosticSink`] as a [`Diagnostic`] (line, error code, message) and keep
//! going. The host program checks [`DiagnosticSink::had_error`] afterwards and
//! decides whether later phases should run.
//!
//! - [`DiagnosticQueue`] is the standard sink: it stores, caps, and
//!   deduplicates diagnostics.
//! - [`emitter::TerminalEmitter`] renders them for humans.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue, DiagnosticSink};
