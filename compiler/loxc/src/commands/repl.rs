//! Interactive prompt.

use std::io::{self, BufRead};

use lox_diagnostic::DiagnosticSink;
use tracing::debug;

use super::{report_diagnostics, Streams};
use crate::CliOptions;

const PROMPT: &str = "> ";

/// Read lines from `input` until EOF or an empty line, scanning each one.
///
/// Every line is independent: diagnostics and the error flag are cleared
/// before the next prompt. Tokens are printed even for a line with errors.
pub fn repl(
    options: &CliOptions,
    input: &mut dyn BufRead,
    streams: &mut Streams<'_>,
) -> io::Result<()> {
    let mut queue = options.new_queue();
    let mut line = String::new();
    let mut line_number = 0usize;

    loop {
        write!(streams.out, "{PROMPT}")?;
        streams.out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(streams.out)?;
            break;
        }
        let text = line.trim_end_matches(['\n', '\r']);
        if text.is_empty() {
            break;
        }
        line_number += 1;

        let tokens = lox_lexer::scan(text, &mut queue);
        debug!(line_number, tokens = tokens.len(), "repl line");
        for token in &tokens {
            writeln!(streams.out, "{token}")?;
        }
        streams.out.flush()?;

        if queue.had_error() {
            report_diagnostics(&mut queue, options, streams);
        }
        queue.reset();
    }

    Ok(())
}
