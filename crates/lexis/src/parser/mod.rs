//! Parsers for translation sources.
//!
//! Two formats produce the same [`TranslationTree`]: JSON objects and the
//! native `.lex` format. Plural-range specifiers have their own small parser,
//! used lazily when plural forms are selected.

pub mod error;
mod file;
mod json;
mod range;

use std::path::Path;

use crate::types::TranslationTree;

pub use error::ParseError;
pub use file::parse_file;
pub use json::parse_json;
pub use range::parse_plural_range;

/// The syntax of a translation source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// The native `.lex` format.
    #[default]
    Lexis,
    /// A JSON object.
    Json,
}

impl SourceFormat {
    /// Pick a format from a file extension: `.json` is JSON, anything else is `.lex`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Lexis,
        }
    }
}

/// Parse `content` in the given format.
pub fn parse_source(content: &str, format: SourceFormat) -> Result<TranslationTree, ParseError> {
    match format {
        SourceFormat::Lexis => parse_file(content),
        SourceFormat::Json => parse_json(content),
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}
