use std::fmt;

use crate::parser::parse_plural_range;

/// How a range with only an upper bound (`",5"`) is compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UpperBound {
    /// `",5"` matches every count up to and including 5.
    #[default]
    Inclusive,

    /// `",5"` matches every count up to and including 0, whatever the bound.
    ///
    /// This mirrors older translation catalogs where the missing lower bound
    /// was compared in place of the upper one. Only useful for data written
    /// against that behavior.
    Legacy,
}

/// A parsed plural-range specifier such as `"5"`, `"1,5"`, `"1,"` or `",5"`.
///
/// Specifiers follow the grammar `^(-?\d+)?(,)?(-?\d+)?$`.
///
/// # Example
///
/// ```
/// use lexis::{PluralRange, UpperBound};
///
/// let range = PluralRange::parse("1,5").unwrap();
/// assert!(range.matches(3, UpperBound::Inclusive));
/// assert!(!range.matches(6, UpperBound::Inclusive));
///
/// // Keys outside the grammar do not parse at all.
/// assert!(PluralRange::parse("other").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PluralRange {
    pub from: Option<i64>,
    pub separator: bool,
    pub to: Option<i64>,
}

impl PluralRange {
    /// Parse a specifier, returning `None` when it is outside the grammar.
    pub fn parse(specifier: &str) -> Option<Self> {
        parse_plural_range(specifier)
    }

    /// Returns true if `plural` falls inside this range.
    pub fn matches(&self, plural: i64, upper_bound: UpperBound) -> bool {
        match (self.from, self.separator, self.to) {
            (Some(from), false, _) => plural == from,
            (None, false, _) | (None, true, None) => false,
            (Some(from), true, Some(to)) => from <= plural && plural <= to,
            (Some(from), true, None) => plural >= from,
            (None, true, Some(to)) => match upper_bound {
                UpperBound::Inclusive => plural <= to,
                UpperBound::Legacy => plural <= 0,
            },
        }
    }
}

impl fmt::Display for PluralRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(from) = self.from {
            write!(f, "{from}")?;
        }
        if self.separator {
            f.write_str(",")?;
        }
        if let Some(to) = self.to {
            write!(f, "{to}")?;
        }
        Ok(())
    }
}
