//! The [`Diagnostic`] record handed to a sink.

use std::fmt;

use crate::ErrorCode;

/// One reported problem.
///
/// Renders as `[line N] Error: message`, or
/// `[line N] Error at <location>: message` when a location is attached.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Diagnostic {
    pub code: ErrorCode,
    /// 1-based source line.
    pub line: u32,
    /// What the error points at (`'foo'`, `end`), if narrower than the line.
    pub location: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            line,
            location: None,
            message: message.into(),
        }
    }

    /// Attach a location narrower than the line.
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error", self.line)?;
        if let Some(location) = &self.location {
            write!(f, " at {location}")?;
        }
        write!(f, ": {}", self.message)
    }
}
