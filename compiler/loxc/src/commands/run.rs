//! The `run` command: scan a file and print its tokens.

use std::io;

use lox_diagnostic::DiagnosticSink;

use super::{read_source, report_diagnostics, scan_source, Streams};
use crate::{exit, CliOptions};

/// Scan the file at `path` and print one token per line.
///
/// Returns [`exit::DATA_ERR`] if the file has lexical errors (nothing is
/// printed to `out` then) and [`exit::IO_ERR`] if it cannot be read.
pub fn run_file(path: &str, options: &CliOptions, streams: &mut Streams<'_>) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            let _ = writeln!(streams.err, "error: {err}");
            return exit::IO_ERR;
        }
    };

    match run_source(&source, options, streams) {
        Ok(status) => status,
        Err(err) => {
            let _ = writeln!(streams.err, "error: {err}");
            exit::IO_ERR
        }
    }
}

pub fn run_source(source: &str, options: &CliOptions, streams: &mut Streams<'_>) -> io::Result<i32> {
    let (tokens, mut queue) = scan_source(source, options);

    if queue.had_error() {
        report_diagnostics(&mut queue, options, streams);
        return Ok(exit::DATA_ERR);
    }

    for token in &tokens {
        writeln!(streams.out, "{token}")?;
    }
    streams.out.flush()?;
    Ok(exit::SUCCESS)
}
