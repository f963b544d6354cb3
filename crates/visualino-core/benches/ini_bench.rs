//! Criterion benchmarks for the INI settings codec.
//!
//! The settings file is read once per process start, so these mostly guard
//! against accidental quadratic behavior on large hand-edited files.
//!
//! Run with:
//! ```bash
//! cargo bench --package visualino-core --bench ini_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use visualino_core::ini::{parse, serialize};
use visualino_core::{Platform, SettingKey, SettingsRecord};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn make_bundled_defaults() -> SettingsRecord {
    let mut record = SettingsRecord::new();
    for platform in Platform::ALL {
        for key in SettingKey::ALL {
            record.insert(key.qualified(platform), key.default_value());
        }
    }
    record
}

fn make_large(entries: usize) -> SettingsRecord {
    (0..entries)
        .map(|i| (format!("section{}/key{i}", i % 16), format!("/opt/value/{i}")))
        .collect()
}

// ── Benchmark groups ──────────────────────────────────────────────────────────

fn bench_parse(c: &mut Criterion) {
    let inputs: &[(&str, String)] = &[
        ("defaults", serialize(&make_bundled_defaults())),
        ("large(1000)", serialize(&make_large(1000))),
    ];

    let mut group = c.benchmark_group("parse");
    for (name, text) in inputs {
        group.bench_with_input(BenchmarkId::new("ini", name), text, |b, text| {
            b.iter(|| parse(black_box(text)).expect("parse must succeed"))
        });
    }
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let inputs: &[(&str, SettingsRecord)] = &[
        ("defaults", make_bundled_defaults()),
        ("large(1000)", make_large(1000)),
    ];

    let mut group = c.benchmark_group("serialize");
    for (name, record) in inputs {
        group.bench_with_input(BenchmarkId::new("ini", name), record, |b, record| {
            b.iter(|| serialize(black_box(record)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
