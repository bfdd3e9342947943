//! Plural-range specifier parser.
//!
//! Specifiers follow `^(-?\d+)?(,)?(-?\d+)?$`. Both bounds are greedy, so
//! `"12"` is a single bound of twelve and `"1-2"` is `from = 1, to = -2`
//! without a separator.

use winnow::ascii::digit1;
use winnow::combinator::{eof, opt, terminated};
use winnow::prelude::*;

use crate::types::PluralRange;

/// Parse a plural-range specifier.
///
/// Returns `None` if the specifier is outside the grammar, including bounds
/// that do not fit in an `i64`.
pub fn parse_plural_range(input: &str) -> Option<PluralRange> {
    let mut remaining = input;
    range_spec(&mut remaining).ok()
}

/// Parse a full specifier: from? ,? to? end
fn range_spec(input: &mut &str) -> ModalResult<PluralRange> {
    let (from, separator, to) = terminated(
        (opt(bound), opt(',').map(|c| c.is_some()), opt(bound)),
        eof,
    )
    .parse_next(input)?;
    Ok(PluralRange {
        from,
        separator,
        to,
    })
}

/// Parse a signed decimal bound: -?\d+
fn bound(input: &mut &str) -> ModalResult<i64> {
    (opt('-'), digit1)
        .take()
        .try_map(str::parse::<i64>)
        .parse_next(input)
}
