use criterion::{Criterion, black_box, criterion_group, criterion_main};
use namefix::{fix_name, is_valid_datetime, key, strip_accents};

const NAMES: &[&str] = &[
    "mcdonald",
    "van der waals",
    "VAN\\u00A0DER\\u00A0SAAR-MCDONALD",
    "garcía-müller",
    "von und zu mcdonald-o'brien jr.",
    "Thé qüick bröwn fóx jümps ovér thè läzy dög.",
];

fn bench_strip(c: &mut Criterion) {
    let long = "áéíóúàèìòùâêîôûäëïöü ".repeat(1_000);
    c.bench_function("strip_accents_20k", |b| {
        b.iter(|| black_box(strip_accents(black_box(&long))))
    });
}

fn bench_fix_name(c: &mut Criterion) {
    c.bench_function("fix_name_mixed", |b| {
        b.iter(|| {
            for n in NAMES {
                black_box(fix_name(black_box(n)));
            }
        })
    });
}

fn bench_key(c: &mut Criterion) {
    c.bench_function("key_mixed", |b| {
        b.iter(|| {
            for n in NAMES {
                black_box(key(black_box(n)));
            }
        })
    });
}

fn bench_date(c: &mut Criterion) {
    c.bench_function("is_valid_datetime", |b| {
        b.iter(|| black_box(is_valid_datetime(black_box("2023-09-06 12:30:00"))))
    });
}

criterion_group!(benches, bench_strip, bench_fix_name, bench_key, bench_date);
criterion_main!(benches);
