#![expect(missing_docs)]

use core::fmt::Write;

use dulljson::{ParseError, Value};

fn render_error(json: &str) -> String {
    match dulljson::parse(json) {
        Ok(value) => panic!("{json:?} was accepted as {value:?}"),
        Err(err) => render(&err),
    }
}

fn render(err: &ParseError) -> String {
    let mut out = String::new();
    write!(out, "{} (code {}, offset {})", err, err.kind().code(), err.offset()).unwrap();
    out
}

#[test]
fn snapshot_scalar_trees() {
    insta::assert_compact_debug_snapshot!(dulljson::parse("null").unwrap(), @"Null");
    insta::assert_compact_debug_snapshot!(dulljson::parse(" true ").unwrap(), @"Boolean(true)");
    insta::assert_compact_debug_snapshot!(dulljson::parse("-1.5e2").unwrap(), @"Number(-150.0)");
    insta::assert_compact_debug_snapshot!(dulljson::parse(r#""a\tb""#).unwrap(), @r#"String("a\tb")"#);
}

#[test]
fn snapshot_nested_tree() {
    let value = dulljson::parse(r#"{"k": [1, {"x": "y"}, []], "n": null}"#).unwrap();
    insta::assert_compact_debug_snapshot!(value, @r#"Object([Member { key: "k", value: Array([Number(1.0), Object([Member { key: "x", value: String("y") }]), Array([])]) }, Member { key: "n", value: Null }])"#);
}

#[test]
fn snapshot_error_messages() {
    insta::assert_snapshot!(render_error(""), @"expected a value at 1:1 (code 1, offset 0)");
    insta::assert_snapshot!(render_error("[1,]"), @"invalid value at 1:4 (code 2, offset 3)");
    insta::assert_snapshot!(render_error("null x"), @"unexpected content after the root value at 1:6 (code 3, offset 5)");
    insta::assert_snapshot!(render_error("[\n1e309]"), @"number too big at 2:1 (code 4, offset 2)");
    insta::assert_snapshot!(render_error(r#""abc"#), @"missing closing quotation mark at 1:5 (code 5, offset 4)");
    insta::assert_snapshot!(render_error(r#""\v""#), @"invalid string escape at 1:2 (code 6, offset 1)");
    insta::assert_snapshot!(render_error("\"\u{1}\""), @"invalid control character in string at 1:2 (code 7, offset 1)");
    insta::assert_snapshot!(render_error(r#""\u12x4""#), @"invalid unicode escape: expected four hex digits at 1:2 (code 8, offset 1)");
    insta::assert_snapshot!(render_error(r#""\uD800""#), @"invalid unicode surrogate pair at 1:2 (code 9, offset 1)");
    insta::assert_snapshot!(render_error("[1 2]"), @"expected ',' or ']' after array element at 1:4 (code 10, offset 3)");
    insta::assert_snapshot!(render_error("{1:1}"), @"expected string key at 1:2 (code 11, offset 1)");
    insta::assert_snapshot!(render_error(r#"{"a" 1}"#), @"expected ':' after object key at 1:6 (code 12, offset 5)");
    insta::assert_snapshot!(render_error(r#"{"a":1]"#), @"expected ',' or '}' after object member at 1:7 (code 13, offset 6)");
}

#[test]
fn snapshot_error_debug() {
    let err = dulljson::parse("{\n  \"a\": tru\n}").unwrap_err();
    insta::assert_compact_debug_snapshot!(err, @"ParseError { kind: InvalidValue, offset: 9, line: 2, column: 8 }");
}

#[test]
fn parse_into_keeps_nothing_from_a_failed_document() {
    let mut value = Value::from("previous");
    let err = dulljson::parse_into(&mut value, r#"[{"a": [1, 2, "#).unwrap_err();
    insta::assert_snapshot!(render(&err), @"expected a value at 1:15 (code 1, offset 14)");
    assert!(value.is_null());
}
