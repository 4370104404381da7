//! Parse failure type.

use std::error::Error;
use std::fmt;

/// Fatal parse failure carrying the offending source position.
///
/// Displays as `parse error at <line>:<col>: <description>`. Only missing
/// module-header tokens, malformed clause punctuation, and unexpected EOF
/// inside a construct produce one of these; everything else the parser
/// tolerates locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based source line.
    pub line: u32,
    /// 1-based source column.
    pub col: u32,
    /// What was expected or what went wrong.
    pub message: String,
}

impl ParseError {
    /// Create a new parse error.
    #[must_use]
    pub fn new(line: u32, col: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            col,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parse error at {}:{}: {}",
            self.line, self.col, self.message
        )
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let err = ParseError::new(12, 7, "expected BEGIN");
        assert_eq!(err.to_string(), "parse error at 12:7: expected BEGIN");
    }
}
