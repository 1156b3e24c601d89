use alloc::{format, string::String};

use bstr::ByteSlice;
use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::arbitrary::JsonNumber;
use crate::{Parser, Value};

fn to_serde(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        Value::String(s) => serde_json::Value::String(s.to_str().unwrap().into()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_serde).collect()),
        Value::Object(members) => serde_json::Value::Object(
            members
                .iter()
                .map(|m| (String::from(m.key.to_str().unwrap()), to_serde(&m.value)))
                .collect(),
        ),
    }
}

/// Property: any finite double written in shortest or exponent form parses
/// back to the same bits.
#[quickcheck]
fn number_text_roundtrips(n: JsonNumber) -> bool {
    let n = n.0;
    let mut parser = Parser::default();
    [format!("{n:?}"), format!("{n:e}")].iter().all(|text| {
        parser
            .parse(text)
            .ok()
            .and_then(|v| v.as_f64())
            .is_some_and(|parsed| parsed.to_bits() == n.to_bits())
    })
}

/// Property: a tree serialized by `serde_json` parses back to the same tree,
/// whether compact or pretty printed.
#[test]
fn serde_json_text_roundtrips() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(value: Value) -> bool {
        let expected = to_serde(&value);
        let texts = [
            serde_json::to_string(&expected).unwrap(),
            serde_json::to_string_pretty(&expected).unwrap(),
        ];

        let mut parser = Parser::default();
        texts.iter().all(|text| match parser.parse(text) {
            Ok(parsed) => parsed == value,
            Err(err) => panic!("rejected {text:?}: {err}"),
        })
    }

    QuickCheck::new()
        .tests(if is_ci::cached() { 10_000 } else { 1_000 })
        .quickcheck(prop as fn(Value) -> bool);
}

/// Property: on UTF-8 text this parser accepts exactly what `serde_json`
/// accepts.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn acceptance_matches_serde_json(text: String) -> bool {
    let ours = Parser::default().parse(&text).is_ok();
    let theirs = serde_json::from_str::<serde_json::Value>(&text).is_ok();
    ours == theirs
}
