//! Command-line option parsing.
//!
//! Options are `--name=value` flags and may appear anywhere on the command
//! line; everything else is positional (the command and its file).

use lox_diagnostic::emitter::ColorMode;
use lox_diagnostic::{DiagnosticConfig, DiagnosticQueue};
use thiserror::Error;

/// Settings shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub color: ColorMode,
    /// Most diagnostics shown per input (0 = unlimited).
    pub error_limit: usize,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            color: ColorMode::Auto,
            error_limit: DiagnosticConfig::default().error_limit,
        }
    }
}

impl CliOptions {
    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        DiagnosticConfig {
            error_limit: self.error_limit,
            ..DiagnosticConfig::default()
        }
    }

    /// A fresh queue configured from these options.
    pub fn new_queue(&self) -> DiagnosticQueue {
        DiagnosticQueue::with_config(self.diagnostic_config())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    #[error("invalid color mode '{0}' (expected auto, always, or never)")]
    InvalidColor(String),
    #[error("invalid error limit '{0}' (expected a non-negative integer)")]
    InvalidErrorLimit(String),
    #[error("unknown option '{0}'")]
    Unknown(String),
}

/// Split `args` (program name already removed) into options and positionals.
pub fn parse_options(args: &[String]) -> Result<(CliOptions, Vec<String>), OptionError> {
    let mut options = CliOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color =
                ColorMode::parse(value).ok_or_else(|| OptionError::InvalidColor(value.to_owned()))?;
        } else if let Some(value) = arg.strip_prefix("--error-limit=") {
            options.error_limit = value
                .parse()
                .map_err(|_| OptionError::InvalidErrorLimit(value.to_owned()))?;
        } else if matches!(arg.as_str(), "--help" | "-h" | "--version" | "-V") {
            positional.push(arg.clone());
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(OptionError::Unknown(arg.clone()));
        } else {
            positional.push(arg.clone());
        }
    }

    Ok((options, positional))
}
