//! Miette diagnostic wrapper for translation parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use lexis::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for translation parse errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(lexis::syntax))]
pub struct LexisDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LexisDiagnostic {
    /// Create a diagnostic pointing at `line:column` (1-based) of `content`.
    pub fn new(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        // Byte offset of the line start, plus the byte column. Counting
        // newlines keeps `\r\n` files aligned.
        let line_start = match line {
            0 | 1 => 0,
            n => content
                .match_indices('\n')
                .nth(n - 2)
                .map_or(content.len(), |(pos, _)| pos + 1),
        };
        let offset = line_start + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        let help = if offset == content.len() {
            Some("the file ends before the entry is complete".to_string())
        } else {
            None
        };

        LexisDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }

    /// Create a diagnostic from a ParseError with source context.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        Self::new(path, content, line, column, err.message())
    }
}
