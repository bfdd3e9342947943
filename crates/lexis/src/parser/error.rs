//! Parse error types for translation sources.

use thiserror::Error;

/// An error that occurred while parsing a translation source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected end of input.
    #[error("unexpected end of input at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },

    /// Well-formed input holding a value a translation tree cannot store.
    #[error("invalid value at {line}:{column}: {message}")]
    InvalidValue {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParseError {
    /// The 1-based line and column the error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnexpectedEof { line, column }
            | ParseError::InvalidValue { line, column, .. } => (*line, *column),
        }
    }

    /// The error message without its position.
    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax { message, .. } | ParseError::InvalidValue { message, .. } => {
                message.clone()
            }
            ParseError::UnexpectedEof { .. } => "unexpected end of file".to_string(),
        }
    }
}
