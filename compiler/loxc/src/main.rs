//! Lox front-end CLI.

use std::io::{self, IsTerminal};

use loxc::commands::{lex_file, repl, run_file, Streams};
use loxc::{exit, init_tracing, parse_options, CliOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, positional) = match parse_options(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(exit::USAGE);
        }
    };

    std::process::exit(dispatch(&options, &positional));
}

fn dispatch(options: &CliOptions, positional: &[String]) -> i32 {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr();
    let err_is_tty = stderr.is_terminal();
    let mut streams = Streams::new(&mut stdout, &mut stderr, err_is_tty);

    let Some(command) = positional.first() else {
        let mut input = io::stdin().lock();
        return match repl(options, &mut input, &mut streams) {
            Ok(()) => exit::SUCCESS,
            Err(err) => {
                eprintln!("error: {err}");
                exit::IO_ERR
            }
        };
    };

    match command.as_str() {
        "run" | "lex" => {
            let [_, path] = positional else {
                eprintln!("Usage: lox {command} <file>");
                return exit::USAGE;
            };
            if command == "run" {
                run_file(path, options, &mut streams)
            } else {
                lex_file(path, options, &mut streams)
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            exit::USAGE
        }
        "version" | "--version" | "-V" => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            exit::SUCCESS
        }
        path if positional.len() == 1 => run_file(path, options, &mut streams),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            exit::USAGE
        }
    }
}

fn print_usage() {
    eprintln!("Lox front end");
    eprintln!();
    eprintln!("Usage: lox [options] [command] [file]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  (none)               Start an interactive prompt");
    eprintln!("  <file>               Same as `run <file>`");
    eprintln!("  run <file>           Scan a file and print its tokens");
    eprintln!("  lex <file>           Dump tokens with kinds and lines");
    eprintln!("  help                 Show this help message");
    eprintln!("  version              Show version information");
    eprintln!();
    eprintln!("Use `-` as the file to read standard input.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --color=<mode>       auto (default), always, never");
    eprintln!("  --error-limit=<n>    Most errors shown per input, 0 for no limit (default 50)");
    eprintln!();
    eprintln!("Exit codes:");
    eprintln!("  64  bad command line");
    eprintln!("  65  lexical errors in the input");
    eprintln!("  74  input could not be read");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=lox_lexer=trace) for scanner tracing.");
}
