// Copyright 2025 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `midstory_value` deep merge.

use std::sync::Once;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use midstory_value::{Mapping, Value, deep_merge, merge_layers};

/// Converts a `serde_json` fixture into a `Value` tree.
fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => Value::from(s.as_str()),
        serde_json::Value::Array(items) => items.iter().map(from_json).collect(),
        serde_json::Value::Object(entries) => Value::Mapping(
            entries
                .iter()
                .map(|(key, value)| (key.as_str(), from_json(value)))
                .collect::<Mapping>(),
        ),
    }
}

/// A style-sheet-like mapping with `keys` top-level entries.
fn wide_fixture(keys: usize, seed: f64) -> Value {
    let mut root = serde_json::Map::new();
    for i in 0..keys {
        root.insert(
            format!("prop{i}"),
            serde_json::json!({
                "size": seed + i as f64,
                "inset": [i, i + 1, i + 2, i + 3],
                "label": format!("entry {i}"),
            }),
        );
    }
    from_json(&serde_json::Value::Object(root))
}

/// A chain of single-key mappings, `depth` levels deep.
fn deep_fixture(depth: usize, leaf: f64) -> Value {
    let mut value = serde_json::json!(leaf);
    for _ in 0..depth {
        value = serde_json::json!({ "inner": value });
    }
    from_json(&value)
}

fn bench_merge(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: Value={} Mapping={}",
            core::mem::size_of::<Value>(),
            core::mem::size_of::<Mapping>(),
        );
    });

    let mut group = c.benchmark_group("merge");

    for keys in [16_usize, 64, 256] {
        let base = wide_fixture(keys, 0.0);
        let over = wide_fixture(keys / 2, 100.0);
        group.bench_with_input(BenchmarkId::new("wide_mapping", keys), &keys, |b, _| {
            b.iter(|| deep_merge(black_box(&base), black_box(&over)));
        });
    }

    for depth in [4_usize, 16, 64] {
        let base = deep_fixture(depth, 1.0);
        let over = deep_fixture(depth, 2.0);
        group.bench_with_input(BenchmarkId::new("deep_mapping", depth), &depth, |b, _| {
            b.iter(|| deep_merge(black_box(&base), black_box(&over)));
        });
    }

    let base: Value = (0..256).map(Value::from).collect();
    let over: Value = (0..192).map(|i| Value::from(i * 2)).collect();
    group.bench_function("sequence_positional", |b| {
        b.iter(|| deep_merge(black_box(&base), black_box(&over)));
    });

    let default = wide_fixture(64, 0.0);
    let layers: Vec<Value> = (0..4).map(|i| wide_fixture(16, f64::from(i))).collect();
    group.bench_function("four_layers", |b| {
        b.iter(|| merge_layers(black_box(&default), black_box(&layers)));
    });

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
