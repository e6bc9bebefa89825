//! Command handlers for the `lox` CLI.
//!
//! Each submodule implements one command. Shared plumbing (reading input,
//! rendering diagnostics) lives here in the module root.

use std::io::{self, Read, Write};

use lox_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lox_diagnostic::DiagnosticQueue;
use lox_ir::TokenList;
use thiserror::Error;
use tracing::debug;

use crate::CliOptions;

mod lex;
mod repl;
mod run;

pub use lex::{lex_file, lex_source};
pub use repl::repl;
pub use run::{run_file, run_source};

/// Output streams a command writes to.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    /// Whether `err` is a terminal; decides `--color=auto`.
    pub err_is_tty: bool,
}

impl<'a> Streams<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write, err_is_tty: bool) -> Self {
        Streams {
            out,
            err,
            err_is_tty,
        }
    }
}

/// Failure to obtain source text.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Other {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    fn from_io(path: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound(path.to_owned()),
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied(path.to_owned()),
            io::ErrorKind::InvalidData => ReadError::InvalidUtf8(path.to_owned()),
            _ => ReadError::Other {
                path: path.to_owned(),
                source: err,
            },
        }
    }
}

/// Read a source file; `-` reads standard input.
pub fn read_source(path: &str) -> Result<String, ReadError> {
    if path == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| ReadError::from_io("<stdin>", e))?;
        return Ok(content);
    }
    std::fs::read_to_string(path).map_err(|e| ReadError::from_io(path, e))
}

/// Scan `source` with a queue built from `options`.
///
/// Returns the tokens together with the queue so the caller can decide how
/// to report.
pub(crate) fn scan_source(source: &str, options: &CliOptions) -> (TokenList, DiagnosticQueue) {
    let mut queue = options.new_queue();
    let tokens = lox_lexer::scan(source, &mut queue);
    debug!(
        tokens = tokens.len(),
        errors = queue.error_count(),
        "scanned input"
    );
    (tokens, queue)
}

/// Render and clear everything in `queue`, followed by a summary line.
pub(crate) fn report_diagnostics(
    queue: &mut DiagnosticQueue,
    options: &CliOptions,
    streams: &mut Streams<'_>,
) {
    let error_count = queue.error_count();
    let suppressed = queue.suppressed_count();
    let diagnostics = queue.flush();

    let mut emitter =
        TerminalEmitter::with_color_mode(&mut *streams.err, options.color, streams.err_is_tty);
    emitter.emit_all(&diagnostics);
    emitter.emit_summary(error_count, suppressed);
    emitter.flush();
}
