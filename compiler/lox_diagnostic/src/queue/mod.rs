//! Diagnostic sink trait and the standard queue implementation.
//!
//! Features:
//! - Sticky "had error" flag, independent of what is stored
//! - Error limits to prevent overwhelming output
//! - Deduplication of back-to-back identical reports
//! - `reset` between independent inputs (one REPL line, one file)

use tracing::trace;

use crate::Diagnostic;

/// Receiver for diagnostics reported by a front-end phase.
///
/// Reporting is fire-and-continue: `report` never fails and never asks the
/// caller to stop.
pub trait DiagnosticSink {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Whether anything has been reported since creation (or the last reset).
    fn had_error(&self) -> bool;
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of stored errors (0 = unlimited).
    pub error_limit: usize,
    /// Drop a report identical to the one stored just before it.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 50,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let tokens = lox_lexer::scan(source, &mut queue);
/// if queue.had_error() {
///     emitter.emit_all(&queue.flush());
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    /// Stored diagnostics, in arrival order.
    diagnostics: Vec<Diagnostic>,
    /// Every report, stored or not.
    reported: usize,
    had_error: bool,
    config: DiagnosticConfig,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            diagnostics: Vec::new(),
            reported: 0,
            had_error: false,
            config,
        }
    }

    /// Add a diagnostic.
    ///
    /// Returns `true` if it was stored, `false` if the limit or
    /// deduplication filtered it. The had-error flag is set either way.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        self.had_error = true;
        self.reported += 1;

        if self.limit_reached() {
            trace!(line = diag.line, code = %diag.code, "error limit reached, dropping");
            return false;
        }

        if self.config.deduplicate && self.diagnostics.last() == Some(&diag) {
            trace!(line = diag.line, code = %diag.code, "duplicate, dropping");
            return false;
        }

        self.diagnostics.push(diag);
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.diagnostics.len() >= self.config.error_limit
    }

    /// Number of stored errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Number of reports dropped by the limit or deduplication.
    pub fn suppressed_count(&self) -> usize {
        self.reported - self.diagnostics.len()
    }

    /// Sort diagnostics by line and return them.
    ///
    /// The sort is stable, so reports on the same line keep arrival order.
    /// Clears the queue, including the had-error flag.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut result = std::mem::take(&mut self.diagnostics);
        result.sort_by_key(|d| d.line);
        self.reset();
        result
    }

    /// Discard everything and clear the had-error flag.
    pub fn reset(&mut self) {
        self.diagnostics.clear();
        self.reported = 0;
        self.had_error = false;
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }

    fn had_error(&self) -> bool {
        self.had_error
    }
}
