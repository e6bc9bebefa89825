//! Error codes for front-end diagnostics.
//!
//! Format: E#### where the first digit is the phase. Only the lexer
//! (E0xxx) reports today.

use std::fmt;

/// Error codes for all diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Number literal that does not decode to a float
    E0003,
}

impl ErrorCode {
    /// All defined codes, in numeric order.
    pub const ALL: [ErrorCode; 3] = [ErrorCode::E0001, ErrorCode::E0002, ErrorCode::E0003];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
        }
    }

    /// One-line summary of what the code means.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E0003 => "malformed number literal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn display_matches_variant_name() {
        for code in ErrorCode::ALL {
            assert_eq!(code.to_string(), format!("{code:?}"));
        }
    }

    #[test]
    fn every_code_has_a_description() {
        for code in ErrorCode::ALL {
            assert!(!code.description().is_empty(), "{code}");
        }
    }
}
