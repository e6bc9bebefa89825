//! The `lex` command: a debug dump of the token stream.

use std::io;

use lox_diagnostic::DiagnosticSink;

use super::{read_source, report_diagnostics, scan_source, Streams};
use crate::{exit, CliOptions};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, options: &CliOptions, streams: &mut Streams<'_>) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            let _ = writeln!(streams.err, "error: {err}");
            return exit::IO_ERR;
        }
    };

    match lex_source(path, &source, options, streams) {
        Ok(status) => status,
        Err(err) => {
            let _ = writeln!(streams.err, "error: {err}");
            exit::IO_ERR
        }
    }
}

/// Dump every token of `source`, errors or not, then any diagnostics.
///
/// `label` names the input in the header line.
pub fn lex_source(
    label: &str,
    source: &str,
    options: &CliOptions,
    streams: &mut Streams<'_>,
) -> io::Result<i32> {
    let (tokens, mut queue) = scan_source(source, options);

    writeln!(streams.out, "Tokens for '{label}' ({} tokens):", tokens.len())?;
    for token in &tokens {
        writeln!(
            streams.out,
            "  {:?} '{}' @ line {}",
            token.kind,
            token.lexeme.escape_debug(),
            token.line
        )?;
    }
    streams.out.flush()?;

    if queue.had_error() {
        report_diagnostics(&mut queue, options, streams);
        return Ok(exit::DATA_ERR);
    }
    Ok(exit::SUCCESS)
}
