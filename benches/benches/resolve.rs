// Copyright 2025 the Midstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `midstory_screen` cascade and resolution.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use midstory_screen::{CascadeMode, MaxWidth, ResolveCx, Responsive, ScreenClasses};
use midstory_value::{Mapping, Value};

fn six_classes() -> ScreenClasses {
    ScreenClasses::builder()
        .class("xs", 360)
        .class("sm", 640)
        .class("md", 1024)
        .class("lg", 1440)
        .class("xl", 1920)
        .class("xxl", MaxWidth::Unbounded)
        .build()
        .unwrap()
}

fn style_overrides() -> Responsive {
    let style = |size: f64, cols: i32| {
        Value::Mapping(
            [
                ("size", Value::from(size)),
                ("cols", Value::from(cols)),
                (
                    "inset",
                    [4.0, 8.0, 4.0, 8.0].map(Value::from).into_iter().collect(),
                ),
            ]
            .into_iter()
            .collect::<Mapping>(),
        )
    };

    Responsive::builder(style(12.0, 1))
        .set("sm", style(13.0, 2))
        .set("md", style(14.0, 3))
        .set("xl", style(16.0, 6))
        .build()
}

fn bench_resolve(c: &mut Criterion) {
    let classes = six_classes();
    let responsive = style_overrides();

    let mut group = c.benchmark_group("resolve");

    for (label, mode) in [
        ("none", CascadeMode::None),
        ("mobile_first", CascadeMode::MobileFirst),
        ("desktop_first", CascadeMode::DesktopFirst),
    ] {
        let cx = ResolveCx::new(classes.clone(), mode);
        group.bench_with_input(BenchmarkId::new("mode", label), &cx, |b, cx| {
            b.iter(|| cx.resolve(black_box("xxl"), black_box(&responsive)).unwrap());
        });
    }

    let cx = ResolveCx::new(classes.clone(), CascadeMode::MobileFirst);
    group.bench_function("cascade_only", |b| {
        b.iter(|| classes.cascade(black_box("xl"), CascadeMode::MobileFirst).unwrap());
    });

    group.bench_function("class_for_width_sweep", |b| {
        b.iter(|| {
            let mut hits = 0_u32;
            for width in (0..4096_u32).step_by(64) {
                hits += u32::from(!cx.classes().class_for_width(black_box(width)).name().is_empty());
            }
            hits
        });
    });

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
