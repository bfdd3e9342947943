//! `.lex` file format parser.
//!
//! ```text
//! // comment
//! title = "Welcome";
//! items = {
//!     "0" = "no items";
//!     "2," = ":count items";
//! };
//! ```

use winnow::combinator::{alt, cut_err, delimited, preceded, repeat, terminated};
use winnow::error::{StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::calculate_position;
use super::error::ParseError;
use crate::types::{TranslationNode, TranslationTree};

/// Parse an entire `.lex` file into a translation tree.
pub fn parse_file(input: &str) -> Result<TranslationTree, ParseError> {
    let mut remaining = input;
    match file(&mut remaining) {
        Ok(tree) => {
            if remaining.is_empty() {
                Ok(tree)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("parse error: {e}"),
                })
            }
        }
    }
}

/// Parse all top-level entries.
fn file(input: &mut &str) -> ModalResult<TranslationTree> {
    skip_ws_and_comments(input)?;
    let entries = entries(input)?;
    Ok(TranslationTree::from_entries(entries))
}

/// Parse entries, each followed by optional whitespace and comments.
fn entries(input: &mut &str) -> ModalResult<Vec<(String, TranslationNode)>> {
    repeat(0.., terminated(entry, skip_ws_and_comments)).parse_next(input)
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)
}

/// Parse whitespace (no comments).
fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse an entry: key = value ;
///
/// Once the `=` is seen the entry is committed, so errors point at the value.
fn entry(input: &mut &str) -> ModalResult<(String, TranslationNode)> {
    let key = key(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let node = cut_err(value)
        .context(StrContext::Expected(StrContextValue::Description(
            "a quoted string or a block",
        )))
        .parse_next(input)?;
    skip_ws_and_comments(input)?;
    cut_err(';')
        .context(StrContext::Expected(StrContextValue::CharLiteral(';')))
        .parse_next(input)?;
    Ok((key, node))
}

/// Parse a key: bare word or quoted string.
fn key(input: &mut &str) -> ModalResult<String> {
    alt((quoted_string, bare_key)).parse_next(input)
}

/// Parse a bare key: letters, digits, `_` and `-`.
fn bare_key(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// Parse a value: quoted string or nested block.
fn value(input: &mut &str) -> ModalResult<TranslationNode> {
    alt((block, quoted_string.map(TranslationNode::Text))).parse_next(input)
}

/// Parse a block: { entries }
fn block(input: &mut &str) -> ModalResult<TranslationNode> {
    delimited(
        ('{', skip_ws_and_comments),
        entries,
        cut_err('}').context(StrContext::Expected(StrContextValue::CharLiteral('}'))),
    )
    .map(TranslationNode::from_entries)
    .parse_next(input)
}

/// Parse a double-quoted string with `\"`, `\\`, `\n` and `\t` escapes.
fn quoted_string(input: &mut &str) -> ModalResult<String> {
    delimited('"', string_body, cut_err('"')).parse_next(input)
}

/// Parse the characters between the quotes.
fn string_body(input: &mut &str) -> ModalResult<String> {
    repeat(0.., alt((escape_sequence, none_of(['"', '\\'])))).parse_next(input)
}

/// Parse an escape sequence, returning the character it stands for.
fn escape_sequence(input: &mut &str) -> ModalResult<char> {
    preceded(
        '\\',
        alt((
            '"'.value('"'),
            '\\'.value('\\'),
            'n'.value('\n'),
            't'.value('\t'),
        )),
    )
    .parse_next(input)
}
