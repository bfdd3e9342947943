//! Integration tests for loading and merging translation sources.

use std::io::Write;
use std::path::Path;

use lexis::{LoadError, Resolver, SourceFormat, TranslationNode};
use tempfile::{Builder, NamedTempFile};

fn lex_file(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".lex").tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    file
}

fn json_file(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{content}").unwrap();
    file.flush().unwrap();
    file
}

// =========================================================================
// Loading from File
// =========================================================================

#[test]
fn load_lex_file() {
    let file = lex_file(r#"hello = "Hello from file!";"#);
    let mut resolver = Resolver::new();

    let added = resolver.load_file(file.path(), "en").unwrap();
    assert_eq!(added, 1);
    assert_eq!(resolver.translate("hello").call(), "Hello from file!");
}

#[test]
fn load_json_file() {
    let file = json_file(r#"{ "errors": { "notfound": "Not found" }, "title": "Home" }"#);
    let mut resolver = Resolver::new();

    let added = resolver.load_file(file.path(), "en").unwrap();
    assert_eq!(added, 2);
    assert_eq!(resolver.translate("errors.notfound").call(), "Not found");
}

#[test]
fn file_without_extension_is_lex() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"hello = "Hi";"#).unwrap();

    let mut resolver = Resolver::new();
    resolver.load_file(file.path(), "en").unwrap();
    assert_eq!(resolver.translate("hello").call(), "Hi");
}

#[test]
fn load_file_selects_language() {
    let en = lex_file(r#"hello = "Hello";"#);
    let fr = lex_file(r#"hello = "Bonjour";"#);
    let mut resolver = Resolver::new();

    resolver.load_file(en.path(), "en").unwrap();
    assert_eq!(resolver.language(), Some("en"));

    resolver.load_file(fr.path(), "fr").unwrap();
    assert_eq!(resolver.language(), Some("fr"));
    assert_eq!(resolver.translate("hello").call(), "Bonjour");
}

#[test]
fn source_format_from_extension() {
    assert_eq!(SourceFormat::from_path(Path::new("fr.json")), SourceFormat::Json);
    assert_eq!(SourceFormat::from_path(Path::new("fr.JSON")), SourceFormat::Json);
    assert_eq!(SourceFormat::from_path(Path::new("fr.lex")), SourceFormat::Lexis);
    assert_eq!(SourceFormat::from_path(Path::new("fr")), SourceFormat::Lexis);
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn missing_file_is_file_not_found() {
    let mut resolver = Resolver::new();
    let err = resolver
        .load_file("/nonexistent/path/fr.lex", "fr")
        .unwrap_err();

    assert!(matches!(err, LoadError::FileNotFound { .. }));
    assert!(err.to_string().contains("/nonexistent/path/fr.lex"));
}

#[test]
fn missing_file_leaves_store_untouched() {
    let mut resolver = Resolver::new();
    resolver
        .load_str("en", r#"hello = "Hello";"#, SourceFormat::Lexis)
        .unwrap();

    let result = resolver.load_file("/nonexistent/fr.lex", "fr");
    assert!(result.is_err());
    assert_eq!(resolver.language(), Some("en"));
    assert!(!resolver.has_language("fr"));
    assert_eq!(resolver.translate("hello").call(), "Hello");
}

#[test]
fn directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut resolver = Resolver::new();

    let err = resolver.load_file(dir.path(), "en").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn parse_error_carries_file_position() {
    let file = lex_file("hello = \"Hello\";\nbroken = ;\n");
    let mut resolver = Resolver::new();

    let err = resolver.load_file(file.path(), "en").unwrap_err();
    let LoadError::Parse {
        path, line, column, ..
    } = err
    else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(path, file.path());
    assert_eq!(line, 2);
    assert_eq!(column, 10);
}

#[test]
fn parse_error_leaves_store_untouched() {
    let mut resolver = Resolver::new();
    resolver
        .load_str("en", r#"hello = "Hello";"#, SourceFormat::Lexis)
        .unwrap();

    let result = resolver.load_str("de", r#"hallo = "Hallo""#, SourceFormat::Lexis);
    assert!(matches!(result, Err(LoadError::Parse { .. })));
    assert!(!resolver.has_language("de"));
    assert_eq!(resolver.language(), Some("en"));
}

#[test]
fn string_parse_error_names_language() {
    let mut resolver = Resolver::new();
    let err = resolver
        .load_str("en", r#"{ "count": 3 }"#, SourceFormat::Json)
        .unwrap_err();

    let LoadError::Parse {
        path,
        line,
        message,
        ..
    } = err
    else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(path, Path::new("<en>"));
    assert_eq!(line, 1);
    insta::assert_snapshot!(
        message,
        @"invalid type: integer `3`, expected a translation string or a map of translations"
    );
}

#[test]
fn json_top_level_must_be_object() {
    let mut resolver = Resolver::new();
    let err = resolver
        .load_str("en", r#""just a string""#, SourceFormat::Json)
        .unwrap_err();
    assert!(matches!(err, LoadError::Parse { line: 1, .. }));
}

// =========================================================================
// Merging Repeated Loads
// =========================================================================

#[test]
fn repeated_loads_keep_existing_keys() {
    let first = lex_file(r#"hello = "Hello"; bye = "Bye";"#);
    let second = lex_file(r#"hello = "Hi there"; thanks = "Thanks";"#);
    let mut resolver = Resolver::new();

    assert_eq!(resolver.load_file(first.path(), "en").unwrap(), 2);
    assert_eq!(resolver.load_file(second.path(), "en").unwrap(), 1);

    assert_eq!(resolver.translate("hello").call(), "Hello");
    assert_eq!(resolver.translate("bye").call(), "Bye");
    assert_eq!(resolver.translate("thanks").call(), "Thanks");
}

#[test]
fn merge_is_shallow_at_top_level() {
    let mut resolver = Resolver::new();
    resolver
        .load_str(
            "en",
            r#"errors = { notfound = "Not found"; };"#,
            SourceFormat::Lexis,
        )
        .unwrap();
    resolver
        .load_str(
            "en",
            r#"errors = { notfound = "Missing"; forbidden = "Forbidden"; };"#,
            SourceFormat::Lexis,
        )
        .unwrap();

    assert_eq!(resolver.translate("errors.notfound").call(), "Not found");
    assert_eq!(resolver.translate("errors.forbidden").call(), "");
}

#[test]
fn merged_order_lists_incoming_keys_first() {
    let mut resolver = Resolver::new();
    resolver
        .load_str("en", r#"a = "1"; b = "2";"#, SourceFormat::Lexis)
        .unwrap();
    resolver
        .load_str("en", r#"c = "3"; b = "x";"#, SourceFormat::Lexis)
        .unwrap();

    let tree = resolver.tree_for("en").unwrap();
    let keys: Vec<&str> = tree.keys().collect();
    assert_eq!(keys, ["c", "b", "a"]);
    assert_eq!(tree.get("b"), Some(&TranslationNode::Text("2".to_string())));
}

#[test]
fn loads_for_other_languages_are_independent() {
    let mut resolver = Resolver::new();
    resolver
        .load_str("en", r#"hello = "Hello";"#, SourceFormat::Lexis)
        .unwrap();
    resolver
        .load_str("ru", r#"hello = "Привет";"#, SourceFormat::Lexis)
        .unwrap();

    assert_eq!(resolver.translate("hello").language("en").call(), "Hello");
    assert_eq!(resolver.translate("hello").call(), "Привет");
}

#[test]
fn mixed_formats_merge() {
    let lex = lex_file(r#"hello = "Hello";"#);
    let json = json_file(r#"{ "hello": "ignored", "menu": { "open": "Open" } }"#);
    let mut resolver = Resolver::new();

    resolver.load_file(lex.path(), "en").unwrap();
    resolver.load_file(json.path(), "en").unwrap();

    assert_eq!(resolver.translate("hello").call(), "Hello");
    assert_eq!(resolver.translate("menu.open").call(), "Open");
}
