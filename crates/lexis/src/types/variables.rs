/// Placeholder values substituted into translated text.
///
/// Variables keep insertion order, which is also the order they are applied
/// in. Values accept anything implementing `ToString`, so counts can be passed
/// as integers.
///
/// # Example
///
/// ```
/// use lexis::Variables;
///
/// let mut vars = Variables::new();
/// vars.insert("name", "Ann");
/// vars.insert("count", 3);
///
/// assert_eq!(vars.get("count"), Some("3"));
/// assert_eq!(vars.substitute("Hello :name, you have :count items"), "Hello Ann, you have 3 items");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    entries: Vec<(String, String)>,
}

impl Variables {
    /// Create an empty set of variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable. An existing name keeps its position and takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`Variables::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every `:name` in `text` with its value.
    ///
    /// Replacement is plain substring replacement, one variable at a time in
    /// insertion order. A variable named `id` therefore also rewrites the start
    /// of `:identifier`, and a value containing `:other` is itself rewritten if
    /// `other` comes later.
    pub fn substitute(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (name, value) in &self.entries {
            let token = format!(":{name}");
            if result.contains(&token) {
                result = result.replace(&token, value);
            }
        }
        result
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Variables::new();
        vars.extend(iter);
        vars
    }
}

impl<K, V> Extend<(K, V)> for Variables
where
    K: Into<String>,
    V: ToString,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Variables
where
    K: Into<String>,
    V: ToString,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
