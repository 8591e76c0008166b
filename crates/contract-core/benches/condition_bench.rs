//! Benchmarks for condition composition and invariant checks

use std::cell::Cell;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use contract_core::{all_of, evaluate, invariant, requires_that, Condition, Outcome};

fn positive(v: &i64) -> Outcome {
    evaluate(*v > 0, "number must be positive")
}

fn even(v: &i64) -> Outcome {
    evaluate(v % 2 == 0, "number must be even")
}

fn bench_and_fulfilled(c: &mut Criterion) {
    let condition = positive.and(even);

    c.bench_function("condition_and_fulfilled", |b| {
        b.iter(|| black_box(condition.check(black_box(&42))))
    });
}

fn bench_or_short_circuit(c: &mut Criterion) {
    let condition = positive.or(even);

    c.bench_function("condition_or_short_circuit", |b| {
        b.iter(|| black_box(condition.check(black_box(&7))))
    });
}

fn bench_all_of(c: &mut Criterion) {
    let condition = all_of((0..16).map(|_| positive.boxed()));

    c.bench_function("condition_all_of_16", |b| {
        b.iter(|| black_box(condition(black_box(&3))))
    });
}

fn bench_requires_that_failure(c: &mut Criterion) {
    c.bench_function("requires_that_failure", |b| {
        b.iter(|| black_box(requires_that(black_box(&-1i64), &positive)))
    });
}

fn bench_invariant_check(c: &mut Criterion) {
    let value = Cell::new(10i64);
    let inv = invariant(&value, |v: &i64| v.signum());

    c.bench_function("invariant_check", |b| {
        b.iter(|| black_box(inv.check()))
    });
}

criterion_group!(
    benches,
    bench_and_fulfilled,
    bench_or_short_circuit,
    bench_all_of,
    bench_requires_that_failure,
    bench_invariant_check,
);
criterion_main!(benches);
