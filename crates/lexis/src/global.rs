//! Process-wide resolver for the `global-resolver` feature.
//!
//! Provides access to one lazily created `Resolver` shared by the whole
//! process, for hosts that would rather not pass a `&Resolver` around.

use std::path::Path;
use std::sync::{LazyLock, PoisonError, RwLock};

use crate::{LoadError, Resolver, Variables};

static GLOBAL_RESOLVER: LazyLock<RwLock<Resolver>> =
    LazyLock::new(|| RwLock::new(Resolver::new()));

/// Provides read access to the global resolver.
pub fn with_resolver<T>(f: impl FnOnce(&Resolver) -> T) -> T {
    let guard = GLOBAL_RESOLVER
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Provides write access to the global resolver.
pub fn with_resolver_mut<T>(f: impl FnOnce(&mut Resolver) -> T) -> T {
    let mut guard = GLOBAL_RESOLVER
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Sets the current language for the global resolver.
pub fn set_language(language: impl Into<String>) {
    with_resolver_mut(|resolver| resolver.set_language(language));
}

/// Returns the current language of the global resolver.
pub fn language() -> Option<String> {
    with_resolver(|resolver| resolver.language().map(str::to_owned))
}

/// Loads a translation file into the global resolver.
pub fn load_file(path: impl AsRef<Path>, language: &str) -> Result<usize, LoadError> {
    with_resolver_mut(|resolver| resolver.load_file(path, language))
}

/// Translates `path` in the current language of the global resolver.
///
/// This covers the common call with no language override and no fallback, so
/// a miss yields `""`. For the full set of options, build the call inside
/// [`with_resolver`]:
///
/// ```ignore
/// let text = lexis::global::with_resolver(|resolver| {
///     resolver.translate("title").language("fr").fallback("Welcome").call()
/// });
/// ```
pub fn translate(path: &str, variables: &Variables, plural: i64) -> String {
    with_resolver(|resolver| {
        resolver
            .translate(path)
            .variables(variables)
            .plural(plural)
            .call()
    })
}
