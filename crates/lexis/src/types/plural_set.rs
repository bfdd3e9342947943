use crate::types::{PluralRange, UpperBound};

/// One selectable form inside a [`PluralSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForm {
    /// The plural-range specifier, kept verbatim. Parsed only at selection time.
    pub specifier: String,
    /// The text selected when the specifier matches.
    pub text: String,
}

impl PluralForm {
    /// Returns true if this form is selected for `plural`.
    ///
    /// Specifiers outside the range grammar always accept.
    pub fn accepts(&self, plural: i64, upper_bound: UpperBound) -> bool {
        match PluralRange::parse(&self.specifier) {
            Some(range) => range.matches(plural, upper_bound),
            None => true,
        }
    }
}

/// An ordered set of plural forms keyed by range specifier.
///
/// Selection walks the forms from the last declared to the first, so forms
/// written later in a file take priority over earlier ones.
///
/// # Example
///
/// ```
/// use lexis::{PluralSet, UpperBound};
///
/// let set: PluralSet = [("0", "no items"), ("1", "one item"), ("2,", "many items")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(set.select(0, UpperBound::Inclusive), Some("no items"));
/// assert_eq!(set.select(7, UpperBound::Inclusive), Some("many items"));
/// assert_eq!(set.select(-1, UpperBound::Inclusive), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralSet {
    forms: Vec<PluralForm>,
}

impl PluralSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a form. A specifier that is already present keeps its position and
    /// takes the new text.
    pub fn insert(&mut self, specifier: impl Into<String>, text: impl Into<String>) {
        let specifier = specifier.into();
        let text = text.into();
        match self.forms.iter_mut().find(|f| f.specifier == specifier) {
            Some(form) => form.text = text,
            None => self.forms.push(PluralForm { specifier, text }),
        }
    }

    /// Get the text stored under an exact specifier.
    pub fn get(&self, specifier: &str) -> Option<&str> {
        self.forms
            .iter()
            .find(|f| f.specifier == specifier)
            .map(|f| f.text.as_str())
    }

    /// Forms in declaration order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PluralForm> {
        self.forms.iter()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Returns true if every specifier parses as a plural range.
    pub fn is_range_set(&self) -> bool {
        self.forms
            .iter()
            .all(|form| PluralRange::parse(&form.specifier).is_some())
    }

    /// Pick the text for `plural`: the last declared form that accepts it.
    pub fn select(&self, plural: i64, upper_bound: UpperBound) -> Option<&str> {
        self.forms
            .iter()
            .rev()
            .find(|form| form.accepts(plural, upper_bound))
            .map(|form| form.text.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for PluralSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = PluralSet::new();
        for (specifier, text) in iter {
            set.insert(specifier, text);
        }
        set
    }
}
