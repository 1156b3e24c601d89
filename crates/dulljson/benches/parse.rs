//! Benchmark – `dulljson::Parser` against `serde_json::Value`
#![allow(missing_docs)]

use std::{fmt::Write, hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dulljson::Parser;

/// A flat array of `n` floats with mixed exponent forms.
fn floats_payload(n: usize) -> String {
    let mut s = String::from("[");
    for i in 0..n {
        if i > 0 {
            s.push(',');
        }
        write!(s, "{}.{}e-{}", i, i % 97, i % 11).unwrap();
    }
    s.push(']');
    s
}

/// An array of `n` objects with escaped string members.
fn records_payload(n: usize) -> String {
    let mut s = String::from("[");
    for i in 0..n {
        if i > 0 {
            s.push(',');
        }
        write!(
            s,
            r#"{{"id":{i},"name":"record é {i}","tags":["a\tb","𝄞"],"ok":true,"next":null}}"#
        )
        .unwrap();
    }
    s.push(']');
    s
}

/// `depth` nested arrays around a single number.
fn nested_payload(depth: usize) -> String {
    format!("{}0{}", "[".repeat(depth), "]".repeat(depth))
}

fn bench_parse(c: &mut Criterion) {
    let payloads = [
        ("floats", floats_payload(10_000)),
        ("records", records_payload(2_000)),
        ("nested", nested_payload(100)),
    ];

    let mut group = c.benchmark_group("parse");
    for (name, payload) in &payloads {
        group.bench_with_input(BenchmarkId::new("dulljson", name), payload, |b, p| {
            let mut parser = Parser::default();
            b.iter(|| black_box(parser.parse(black_box(p.as_str())).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("serde_json", name), payload, |b, p| {
            b.iter(|| black_box(serde_json::from_str::<serde_json::Value>(black_box(p.as_str())).unwrap()));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_parse }
criterion_main!(benches);
