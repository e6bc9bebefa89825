//! Diagnostic Emitters
//!
//! An emitter turns stored [`Diagnostic`]s into output. The terminal emitter
//! is the only format today; the trait keeps the driver independent of it.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a closing summary: how many errors were shown and how many were
    /// held back by the queue's limit or deduplication.
    fn emit_summary(&mut self, error_count: usize, suppressed_count: usize);
}
