//! JSON translation sources.

use serde_json::error::Category;

use super::error::ParseError;
use crate::types::TranslationTree;

/// Parse a JSON object into a translation tree, keeping key order.
pub fn parse_json(input: &str) -> Result<TranslationTree, ParseError> {
    serde_json::from_str(input).map_err(|e| {
        let (line, column) = (e.line(), e.column());
        match e.classify() {
            Category::Eof => ParseError::UnexpectedEof { line, column },
            Category::Data => ParseError::InvalidValue {
                line,
                column,
                message: strip_position(&e),
            },
            Category::Syntax | Category::Io => ParseError::Syntax {
                line,
                column,
                message: strip_position(&e),
            },
        }
    })
}

/// serde_json appends " at line L column C" to its messages; the position is
/// carried separately.
fn strip_position(error: &serde_json::Error) -> String {
    let message = error.to_string();
    match message.rfind(" at line ") {
        Some(pos) => message[..pos].to_string(),
        None => message,
    }
}
