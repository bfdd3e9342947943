//! Tests for `:name` placeholder substitution.

use lexis::{Resolver, SourceFormat, Variables, vars};

// =========================================================================
// Construction
// =========================================================================

#[test]
fn vars_macro_empty() {
    let v = vars! {};
    assert!(v.is_empty());
}

#[test]
fn vars_macro_keeps_order_and_stringifies() {
    let v = vars! { "b" => 2, "a" => "one", "c" => 'x' };
    let pairs: Vec<(&str, &str)> = v.iter().collect();
    assert_eq!(pairs, [("b", "2"), ("a", "one"), ("c", "x")]);
}

#[test]
fn insert_replaces_in_place() {
    let mut v = Variables::new();
    v.insert("first", 1);
    v.insert("second", 2);
    v.insert("first", "uno");

    let pairs: Vec<(&str, &str)> = v.iter().collect();
    assert_eq!(pairs, [("first", "uno"), ("second", "2")]);
}

#[test]
fn from_array_and_builder_style() {
    let from_array = Variables::from([("name", "Ann"), ("city", "Oslo")]);
    let built = Variables::new().with("name", "Ann").with("city", "Oslo");
    assert_eq!(from_array, built);
}

// =========================================================================
// Substitution
// =========================================================================

#[test]
fn substitutes_every_placeholder() {
    let v = vars! { "name" => "Ann", "count" => "3" };
    assert_eq!(
        v.substitute("Hello :name, you have :count items"),
        "Hello Ann, you have 3 items"
    );
}

#[test]
fn substitutes_repeated_placeholders() {
    let v = vars! { "x" => "7" };
    assert_eq!(v.substitute(":x + :x = 14"), "7 + 7 = 14");
}

#[test]
fn unknown_placeholders_are_left_alone() {
    let v = vars! { "name" => "Ann" };
    assert_eq!(v.substitute("Hi :name, :missing"), "Hi Ann, :missing");
}

#[test]
fn replacement_is_plain_substring() {
    let v = vars! { "id" => "42" };
    assert_eq!(v.substitute(":id and :identifier"), "42 and 42entifier");
}

#[test]
fn insertion_order_decides_overlaps() {
    let longest_first = vars! { "identifier" => "X", "id" => "42" };
    assert_eq!(longest_first.substitute(":id :identifier"), "42 X");

    let shortest_first = vars! { "id" => "42", "identifier" => "X" };
    assert_eq!(shortest_first.substitute(":id :identifier"), "42 42entifier");
}

#[test]
fn values_are_rewritten_by_later_variables() {
    let v = vars! { "a" => ":b", "b" => "done" };
    assert_eq!(v.substitute(":a"), "done");

    let v = vars! { "b" => "done", "a" => ":b" };
    assert_eq!(v.substitute(":a"), ":b");
}

#[test]
fn empty_variables_leave_text_unchanged() {
    assert_eq!(Variables::new().substitute("Time: 10:30"), "Time: 10:30");
}

// =========================================================================
// Through the Resolver
// =========================================================================

#[test]
fn translate_substitutes_variables() {
    let mut resolver = Resolver::new();
    resolver
        .load_str(
            "en",
            r#"inbox = "Hello :name, you have :count items";"#,
            SourceFormat::Lexis,
        )
        .unwrap();

    let vars = vars! { "name" => "Ann", "count" => 3 };
    assert_eq!(
        resolver.translate("inbox").variables(&vars).call(),
        "Hello Ann, you have 3 items"
    );
    assert_eq!(
        resolver.translate("inbox").call(),
        "Hello :name, you have :count items"
    );
}
