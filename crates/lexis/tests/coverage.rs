//! Tests for comparing languages and suggesting paths.

use lexis::{CoverageWarning, Resolver, SourceFormat};

fn resolver() -> Resolver {
    let mut resolver = Resolver::new();
    resolver
        .load_str(
            "en",
            r#"
        title = "Welcome";
        errors = { notfound = "Not found"; forbidden = "Forbidden"; };
        menu = { file = { open = "Open"; save = "Save"; }; quit = "Quit"; };
        items = { "0" = "no items"; "1," = ":count items"; };
    "#,
            SourceFormat::Lexis,
        )
        .unwrap();
    resolver
        .load_str(
            "fr",
            r#"
        title = "Bienvenue";
        errors = { notfound = "Introuvable"; };
        menu = { quit = "Quitter"; help = "Aide"; };
        items = { "0" = "aucun"; };
    "#,
            SourceFormat::Lexis,
        )
        .unwrap();
    resolver
}

fn missing(path: &str, language: &str) -> CoverageWarning {
    CoverageWarning::MissingPath {
        path: path.to_string(),
        language: language.to_string(),
    }
}

fn unknown(path: &str, language: &str) -> CoverageWarning {
    CoverageWarning::UnknownPath {
        path: path.to_string(),
        language: language.to_string(),
    }
}

// =========================================================================
// Coverage
// =========================================================================

#[test]
fn reports_missing_and_unknown_paths_sorted() {
    let warnings = resolver().check_coverage("en", "fr");
    assert_eq!(
        warnings,
        vec![
            missing("errors.forbidden", "fr"),
            missing("menu.file.open", "fr"),
            missing("menu.file.save", "fr"),
            unknown("menu.help", "fr"),
        ]
    );
}

#[test]
fn string_only_sections_list_each_key() {
    let resolver = resolver();
    let paths = resolver.tree_for("en").unwrap().leaf_paths('.');
    assert_eq!(
        paths,
        [
            "title",
            "errors.notfound",
            "errors.forbidden",
            "menu.file.open",
            "menu.file.save",
            "menu.quit",
            "items",
        ]
    );
}

#[test]
fn section_keys_differ_between_languages() {
    let mut resolver = Resolver::new();
    resolver
        .load_str(
            "en",
            r#"{ "errors": { "notfound": "Not found", "forbidden": "Forbidden" } }"#,
            SourceFormat::Json,
        )
        .unwrap();
    resolver
        .load_str(
            "fr",
            r#"{ "errors": { "notfound": "Introuvable", "teapot": "Théière" } }"#,
            SourceFormat::Json,
        )
        .unwrap();

    assert_eq!(
        resolver.check_coverage("en", "fr"),
        vec![
            missing("errors.forbidden", "fr"),
            unknown("errors.teapot", "fr"),
        ]
    );
    assert_eq!(resolver.translate("errors.forbidden").call(), "");
}

#[test]
fn plural_sets_count_as_one_leaf() {
    // fr lacks the "1," form, but "items" exists in both.
    let warnings = resolver().check_coverage("en", "fr");
    assert!(warnings.iter().all(|w| w.path() != "items"));
}

#[test]
fn identical_languages_have_no_warnings() {
    assert!(resolver().check_coverage("en", "en").is_empty());
}

#[test]
fn unloaded_language_has_no_warnings() {
    let resolver = resolver();
    assert!(resolver.check_coverage("en", "de").is_empty());
    assert!(resolver.check_coverage("de", "en").is_empty());
}

#[test]
fn warning_display() {
    assert_eq!(
        missing("menu.file", "fr").to_string(),
        "'menu.file' is not translated in 'fr'"
    );
    assert_eq!(
        unknown("menu.help", "fr").to_string(),
        "'menu.help' in 'fr' has no source translation"
    );
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn suggests_close_paths() {
    let resolver = resolver();
    assert_eq!(resolver.suggest_paths("menu.qit", "en"), ["menu.quit"]);
    assert_eq!(resolver.suggest_paths("titel", "en"), ["title"]);
    assert_eq!(
        resolver.suggest_paths("errors.notfond", "en"),
        ["errors.notfound"]
    );
}

#[test]
fn exact_and_distant_paths_are_not_suggested() {
    let resolver = resolver();
    assert!(resolver.suggest_paths("title", "en").is_empty());
    assert!(resolver.suggest_paths("something.else", "en").is_empty());
}

#[test]
fn suggestions_for_unloaded_language_are_empty() {
    assert!(resolver().suggest_paths("title", "de").is_empty());
}
