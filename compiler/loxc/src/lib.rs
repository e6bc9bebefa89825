//! Lox front-end driver.
//!
//! The `lox` binary is a thin shell over this library: argument parsing
//! lives in [`options`], each command in [`commands`]. Commands write to
//! caller-supplied streams and return an exit status, so they run the same
//! under tests as on a terminal.

pub mod commands;
pub mod options;
mod tracing_setup;

pub use options::{parse_options, CliOptions, OptionError};
pub use tracing_setup::init_tracing;

/// Process exit statuses, following the BSD `sysexits.h` convention.
pub mod exit {
    pub const SUCCESS: i32 = 0;
    /// Bad command line.
    pub const USAGE: i32 = 64;
    /// The input had lexical errors.
    pub const DATA_ERR: i32 = 65;
    /// Reading input or writing output failed.
    pub const IO_ERR: i32 = 74;
}
