//! Translation storage and lookup.
//!
//! The Resolver struct provides the user-facing API for loading translation
//! trees, selecting the current language, and translating paths.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use bon::{Builder, bon};
use tracing::{debug, trace, warn};

use crate::interpreter::error::LoadError;
use crate::parser::{ParseError, SourceFormat, parse_source};
use crate::types::{NodeRef, TranslationTree, UpperBound, Variables};

/// Per-language translation trees plus the current language.
///
/// Loading a file merges it under whatever is already loaded for that
/// language, so keys from earlier loads are never overwritten. Lookups never
/// fail: a missing language, path, or plural form produces the fallback text
/// or an empty string.
///
/// # Example
///
/// ```
/// use lexis::{Resolver, SourceFormat, vars};
///
/// let mut resolver = Resolver::new();
/// resolver.load_str("en", r#"
///     greeting = "Hello :name";
///     items = { "0" = "no items"; "1" = "one item"; "2," = ":count items"; };
/// "#, SourceFormat::Lexis).unwrap();
///
/// assert_eq!(resolver.language(), Some("en"));
/// assert_eq!(
///     resolver.translate("greeting").variables(&vars! { "name" => "Ann" }).call(),
///     "Hello Ann",
/// );
/// assert_eq!(
///     resolver
///         .translate("items")
///         .plural(4)
///         .variables(&vars! { "count" => 4 })
///         .call(),
///     "4 items",
/// );
/// assert_eq!(resolver.translate("missing").fallback("?").call(), "?");
/// ```
#[derive(Debug, Builder)]
pub struct Resolver {
    /// Current language code. Also set by every successful load.
    #[builder(into)]
    language: Option<String>,

    /// Delimiter between path segments.
    #[builder(default = '.')]
    separator: char,

    /// How ranges with only an upper bound are compared.
    #[builder(default)]
    upper_bound: UpperBound,

    /// Translation trees by language code.
    #[builder(skip)]
    store: BTreeMap<String, TranslationTree>,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::builder().build()
    }
}

impl Resolver {
    /// Create a resolver with no language selected and nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with the given current language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Resolver::builder().language(language).build()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// Get the current language code, if one has been selected.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Change the current language.
    ///
    /// Nothing needs to be loaded for the language yet; lookups against an
    /// unloaded language simply miss.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = Some(language.into());
    }

    /// The path segment delimiter.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The comparison used for ranges with only an upper bound.
    pub fn upper_bound(&self) -> UpperBound {
        self.upper_bound
    }

    // =========================================================================
    // Store Access
    // =========================================================================

    /// Get the translation tree for a specific language.
    ///
    /// Returns None if nothing has been loaded for that language.
    pub fn tree_for(&self, language: &str) -> Option<&TranslationTree> {
        self.store.get(language)
    }

    /// Get the translation tree for the current language.
    pub fn tree(&self) -> Option<&TranslationTree> {
        self.language().and_then(|language| self.tree_for(language))
    }

    /// Loaded language codes, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.store.keys().map(String::as_str)
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.store.contains_key(language)
    }

    /// Returns true if `path` resolves to text or plural forms in the current
    /// language.
    pub fn contains(&self, path: &str) -> bool {
        self.tree()
            .and_then(|tree| tree.resolve(path, self.separator))
            .is_some_and(|node| !matches!(node, NodeRef::Branch(_)))
    }

    // =========================================================================
    // Translation Loading
    // =========================================================================

    /// Load a translation file and merge it into `language`.
    ///
    /// The format is picked from the extension (see [`SourceFormat::from_path`]).
    /// Keys already loaded for the language keep their values; only new
    /// top-level keys are added. On success the current language becomes
    /// `language` and the number of added keys is returned. On failure nothing
    /// changes.
    ///
    /// # Example
    ///
    /// ```ignore
    /// resolver.load_file("translations/fr.lex", "fr")?;
    /// ```
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        language: &str,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let tree = parse_source(&content, SourceFormat::from_path(path))
            .map_err(|e| parse_failure(path.to_path_buf(), language, e))?;
        let added = self.merge(language, tree);
        debug!(
            language,
            path = %path.display(),
            added,
            "loaded translation file"
        );
        Ok(added)
    }

    /// Load translations from a string and merge them into `language`.
    ///
    /// Behaves like [`Resolver::load_file`] without the file access. Errors
    /// name the source `<language>`.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis::{Resolver, SourceFormat};
    ///
    /// let mut resolver = Resolver::new();
    /// let added = resolver
    ///     .load_str("en", r#"{ "hello": "Hello!", "bye": "Bye!" }"#, SourceFormat::Json)
    ///     .unwrap();
    /// assert_eq!(added, 2);
    ///
    /// // Existing keys win; only "thanks" is new.
    /// let added = resolver
    ///     .load_str("en", r#"{ "hello": "Hi!", "thanks": "Thanks!" }"#, SourceFormat::Json)
    ///     .unwrap();
    /// assert_eq!(added, 1);
    /// assert_eq!(resolver.translate("hello").call(), "Hello!");
    /// ```
    pub fn load_str(
        &mut self,
        language: &str,
        content: &str,
        format: SourceFormat,
    ) -> Result<usize, LoadError> {
        let tree = parse_source(content, format)
            .map_err(|e| parse_failure(PathBuf::from(format!("<{language}>")), language, e))?;
        let added = self.merge(language, tree);
        debug!(language, added, "loaded translations from string");
        Ok(added)
    }

    /// Merge a parsed tree under the existing one and select the language.
    fn merge(&mut self, language: &str, tree: TranslationTree) -> usize {
        let added = self
            .store
            .entry(language.to_string())
            .or_default()
            .merge_under(tree);
        self.language = Some(language.to_string());
        added
    }
}

#[bon]
impl Resolver {
    /// Translate a path.
    ///
    /// Resolves `path` in `language` (or the current language), picks a plural
    /// form for `plural` (default 0), falls back to `fallback` (or `""`) when
    /// nothing matches, and substitutes `variables` into the result. The
    /// fallback text gets the same substitution.
    ///
    /// Plural forms are checked from the last declared to the first. A form
    /// whose key is not a range specifier always matches.
    #[builder]
    pub fn translate(
        &self,
        #[builder(start_fn)] path: &str,
        variables: Option<&Variables>,
        #[builder(default)] plural: i64,
        language: Option<&str>,
        fallback: Option<&str>,
    ) -> String {
        let text = match self.lookup(path, plural, language) {
            Some(text) => text,
            None => {
                let language = language.or(self.language.as_deref());
                trace!(path, language = ?language, plural, "no translation matched");
                fallback.unwrap_or_default()
            }
        };

        match variables {
            Some(variables) => variables.substitute(text),
            None => text.to_string(),
        }
    }
}

impl Resolver {
    /// Find the raw text `path` selects for `plural`, before substitution.
    ///
    /// Uses `language` when given, otherwise the current language. Returns
    /// None when the language is not loaded, the path is missing or names a
    /// branch, or no plural form accepts `plural`.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis::{Resolver, SourceFormat};
    ///
    /// let mut resolver = Resolver::new();
    /// resolver.load_str("en", r#"items = { "1" = "one item"; };"#, SourceFormat::Lexis).unwrap();
    ///
    /// assert_eq!(resolver.lookup("items", 1, None), Some("one item"));
    /// assert_eq!(resolver.lookup("items", 5, None), None);
    /// ```
    pub fn lookup(&self, path: &str, plural: i64, language: Option<&str>) -> Option<&str> {
        let tree = self.store.get(language.or(self.language.as_deref())?)?;
        self.select(tree, path, plural)
    }

    /// Resolve `path` in `tree` and pick the text for `plural`.
    fn select<'a>(&self, tree: &'a TranslationTree, path: &str, plural: i64) -> Option<&'a str> {
        match tree.resolve(path, self.separator)? {
            NodeRef::Text(text) => Some(text),
            NodeRef::Plural(set) => set.select(plural, self.upper_bound),
            NodeRef::Branch(_) => None,
        }
    }
}

/// Attach the source path to a parse error.
fn parse_failure(path: PathBuf, language: &str, error: ParseError) -> LoadError {
    let (line, column) = error.position();
    warn!(language, path = %path.display(), line, column, "failed to parse translations");
    LoadError::Parse {
        path,
        line,
        column,
        message: error.message(),
    }
}
