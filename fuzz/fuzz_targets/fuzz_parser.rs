#![no_main]
use arbitrary::{Arbitrary, Unstructured};
use dulljson::ParseErrorKind;
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

/// Containers opened before `serde_json` gives up on recursion; inputs that
/// may go deeper are only checked for panics.
const MAX_COMPARED_DEPTH: usize = 100;

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn to_serde(value: &dulljson::Value) -> Option<Value> {
    Some(match value {
        dulljson::Value::Null => Value::Null,
        dulljson::Value::Boolean(b) => Value::Bool(*b),
        dulljson::Value::Number(n) => Value::Number(serde_json::Number::from_f64(*n)?),
        dulljson::Value::String(_) => Value::String(value.as_str()?.to_owned()),
        dulljson::Value::Array(items) => {
            Value::Array(items.iter().map(to_serde).collect::<Option<_>>()?)
        }
        dulljson::Value::Object(members) => {
            let mut map = Map::new();
            for m in members {
                map.insert(std::str::from_utf8(&m.key).ok()?.to_owned(), to_serde(&m.value)?);
            }
            Value::Object(map)
        }
    })
}

/// Raw bytes: never panic, and agree with `serde_json` on acceptance.
fn differential(data: &[u8]) {
    let ours = dulljson::parse_slice(data);

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let opened = data.iter().filter(|&&b| b == b'[' || b == b'{').count();
    if opened > MAX_COMPARED_DEPTH {
        return;
    }

    let theirs = serde_json::from_str::<Value>(text);
    assert_eq!(
        ours.is_ok(),
        theirs.is_ok(),
        "disagreement on {text:?}: ours={ours:?} theirs={theirs:?}"
    );
}

/// Structured values: whatever `serde_json` writes parses back to the same
/// tree.
fn roundtrip(data: &[u8]) {
    let mut u = Unstructured::new(data);
    let Ok(ArbitraryValue(expected)) = ArbitraryValue::arbitrary(&mut u) else {
        return;
    };
    let compact = serde_json::to_string(&expected).unwrap();
    let pretty = serde_json::to_string_pretty(&expected).unwrap();
    for text in [compact, pretty] {
        let parsed = match dulljson::parse(&text) {
            Ok(parsed) => parsed,
            Err(err) if err.kind() == ParseErrorKind::NestingTooDeep => continue,
            Err(err) => panic!("rejected serde_json output {text:?}: {err}"),
        };
        assert_eq!(to_serde(&parsed).as_ref(), Some(&expected), "{text:?}");
    }
}

fuzz_target!(|data: &[u8]| {
    differential(data);
    roundtrip(data);
});
