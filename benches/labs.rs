//! Criterion counterparts of the single-shot lab timings

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use algo_labs::generators::{random_digraph, random_integer_array, random_tree, random_undirected_graph};
use algo_labs::graph::{shortest_path, spanning_tree, traversal};
use algo_labs::math::{fibonacci, pi_digits, primes};
use algo_labs::sorting::sort;
use algo_labs::utils::lab_rng;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");
    for variant in fibonacci::available_variants() {
        group.bench_with_input(BenchmarkId::new(variant.name, 80), &80u32, |b, &n| {
            b.iter(|| black_box((variant.function)(black_box(n))));
        });
    }
    group.finish();
}

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");
    let input = random_integer_array(&mut lab_rng(Some(12345)), 2000, -10_000, 10_000);
    for variant in sort::available_variants() {
        group.bench_with_input(BenchmarkId::new(variant.name, input.len()), &input, |b, input| {
            b.iter(|| black_box((variant.function)(input)));
        });
    }
    group.finish();
}

fn bench_sieves(c: &mut Criterion) {
    let mut group = c.benchmark_group("primes");
    for variant in primes::available_variants() {
        group.bench_with_input(BenchmarkId::new(variant.name, 2000), &2000usize, |b, &n| {
            b.iter(|| black_box((variant.function)(black_box(n))));
        });
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let tree = random_tree(&mut lab_rng(Some(12345)), 10_000);
    for variant in traversal::available_variants() {
        group.bench_with_input(BenchmarkId::new(variant.name, tree.vertex_count()), &tree, |b, tree| {
            b.iter(|| black_box((variant.function)(tree, 0)));
        });
    }
    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    group.sample_size(10);
    let Ok(graph) = random_digraph(&mut lab_rng(Some(12345)), 100, 80) else {
        group.finish();
        return;
    };
    for variant in shortest_path::available_variants() {
        group.bench_with_input(BenchmarkId::new(variant.name, 100), &graph, |b, graph| {
            b.iter(|| black_box((variant.function)(graph)));
        });
    }
    group.finish();
}

fn bench_spanning_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("spanning_tree");
    let Ok(graph) = random_undirected_graph(&mut lab_rng(Some(12345)), 300, 10, 0.5) else {
        group.finish();
        return;
    };
    for variant in spanning_tree::available_variants() {
        group.bench_with_input(BenchmarkId::new(variant.name, 300), &graph, |b, graph| {
            b.iter(|| black_box((variant.function)(graph)));
        });
    }
    group.finish();
}

fn bench_pi_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("pi_digits");
    group.sample_size(10);
    for variant in pi_digits::available_variants() {
        group.bench_with_input(BenchmarkId::new(variant.name, 100), &100i64, |b, &index| {
            b.iter(|| black_box((variant.function)(black_box(index))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fibonacci,
    bench_sorting,
    bench_sieves,
    bench_traversal,
    bench_shortest_paths,
    bench_spanning_tree,
    bench_pi_digits
);
criterion_main!(benches);
