//! Error types for URI parsing.

use std::fmt;

/// Errors that can occur when parsing an absolute URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// URI is empty
    Empty,
    /// Input is a valid relative reference, but an absolute URI needs a scheme
    MissingScheme,
    /// Input does not match the RFC 3986 `URI` rule
    Syntax {
        /// Description reported by the underlying parser
        reason: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::Empty => write!(f, "input is empty"),
            ParseErrorKind::MissingScheme => write!(
                f,
                "missing scheme; relative references cannot be ordered, resolve them against a base first"
            ),
            ParseErrorKind::Syntax { reason } => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ParseError {}
