//! Comparing languages and suggesting paths.

use std::collections::BTreeSet;

use strsim::levenshtein;

use crate::interpreter::Resolver;
use crate::interpreter::error::CoverageWarning;

impl Resolver {
    /// Compare the translations of `target_language` against `source_language`.
    ///
    /// Reports every leaf path the source has and the target lacks, and every
    /// leaf path the target has that the source does not, sorted by path.
    /// Returns an empty vector if either language is not loaded.
    ///
    /// # Example
    ///
    /// ```
    /// use lexis::{CoverageWarning, Resolver, SourceFormat};
    ///
    /// let mut resolver = Resolver::new();
    /// resolver.load_str("en", r#"hello = "Hello!"; bye = "Bye!";"#, SourceFormat::Lexis).unwrap();
    /// resolver.load_str("fr", r#"hello = "Bonjour !";"#, SourceFormat::Lexis).unwrap();
    ///
    /// let warnings = resolver.check_coverage("en", "fr");
    /// assert_eq!(warnings, vec![CoverageWarning::MissingPath {
    ///     path: "bye".to_string(),
    ///     language: "fr".to_string(),
    /// }]);
    /// ```
    pub fn check_coverage(
        &self,
        source_language: &str,
        target_language: &str,
    ) -> Vec<CoverageWarning> {
        let (Some(source), Some(target)) = (
            self.tree_for(source_language),
            self.tree_for(target_language),
        ) else {
            return Vec::new();
        };

        let source_paths: BTreeSet<String> =
            source.leaf_paths(self.separator()).into_iter().collect();
        let target_paths: BTreeSet<String> =
            target.leaf_paths(self.separator()).into_iter().collect();

        let missing = source_paths
            .difference(&target_paths)
            .map(|path| CoverageWarning::MissingPath {
                path: path.clone(),
                language: target_language.to_string(),
            });
        let unknown = target_paths
            .difference(&source_paths)
            .map(|path| CoverageWarning::UnknownPath {
                path: path.clone(),
                language: target_language.to_string(),
            });

        let mut warnings: Vec<CoverageWarning> = missing.chain(unknown).collect();
        warnings.sort_by(|a, b| a.path().cmp(b.path()));
        warnings
    }

    /// Suggest up to three known paths close to `path` in `language`.
    ///
    /// Paths within a small edit distance are returned closest first. Exact
    /// matches are not suggestions.
    pub fn suggest_paths(&self, path: &str, language: &str) -> Vec<String> {
        let Some(tree) = self.tree_for(language) else {
            return Vec::new();
        };

        let max_distance = if path.len() <= 3 { 1 } else { 2 };
        let mut suggestions: Vec<(usize, String)> = tree
            .leaf_paths(self.separator())
            .into_iter()
            .filter_map(|candidate| {
                let dist = levenshtein(path, &candidate);
                if dist <= max_distance && dist > 0 {
                    Some((dist, candidate))
                } else {
                    None
                }
            })
            .collect();

        suggestions.sort_by_key(|(dist, _)| *dist);
        suggestions.into_iter().take(3).map(|(_, s)| s).collect()
    }
}
