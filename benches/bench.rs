//! Criterion benchmarks for the odonym database.
//!
//! Covers the three lookup paths; the spelling path is the expensive one
//! and the interesting number, since it scans the type-token partition of
//! the fuzzy index.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use odonym::{Database, Locale};

/// Generate synthetic street names: enough distinct proper tokens to make
/// the fuzzy partition realistically wide.
fn generate_names(count: usize) -> Vec<String> {
    let stems = [
        "Ленина",
        "Пушкина",
        "Гагарина",
        "Мира",
        "Советская",
        "Центральная",
        "Школьная",
        "Лесная",
        "Садовая",
        "Набережная",
        "Кирова",
        "Чехова",
        "Гоголя",
        "Толстого",
        "Некрасова",
        "Тургенева",
    ];

    let mut names = Vec::with_capacity(count);
    for i in 0..count {
        let stem = stems[i % stems.len()];
        names.push(format!("улица {stem}-{}", i / stems.len()));
    }
    names
}

fn bench_add(c: &mut Criterion) {
    let locale = Locale::new("ru_RU").unwrap();
    let names = generate_names(1000);

    let mut group = c.benchmark_group("add");
    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function("add_1000", |b| {
        b.iter(|| {
            let mut db = Database::new(locale.clone());
            for name in &names {
                db.add(name).unwrap();
            }
            black_box(db.len())
        })
    });
    group.finish();
}

fn bench_checks(c: &mut Criterion) {
    let locale = Locale::new("ru_RU").unwrap();
    let mut db = Database::new(locale);
    for name in generate_names(1000) {
        db.add(&name).unwrap();
    }

    let mut group = c.benchmark_group("checks");
    group.bench_function("exact_match", |b| {
        b.iter(|| black_box(db.check_exact_match("улица Ленина-3").unwrap()))
    });
    group.bench_function("canonical_form", |b| {
        b.iter(|| black_box(db.check_canonical_form("Ленина-3 улица").unwrap()))
    });
    group.bench_function("spelling_hit", |b| {
        b.iter(|| black_box(db.check_spelling("улица Ленена-3").unwrap()))
    });
    group.bench_function("spelling_miss", |b| {
        b.iter(|| black_box(db.check_spelling("улица Тьмутаракань").unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_add, bench_checks);
criterion_main!(benches);
