//! Benchmarks comparing the three join strategies across input sizes.


pub use fixtures::make_dataset;

use criterion::{BenchmarkId, Criterion};
use postjoin_rs::{GroupedMap, JoinStrategy, KeyedObject, LinearScan};
use std::hint::black_box;

/// Register the strategy comparison benchmarks.
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Join - Strategies");

    // Five comments per post, the layout of the placeholder API (100 posts / 500 comments)
    for &post_count in &[100u64, 1_000, 5_000] {
        let (posts, comments) = make_dataset(post_count, 5);
        let posts = posts.as_slice();
        let comments = comments.as_slice();

        group.bench_with_input(
            BenchmarkId::new("linear_scan", post_count),
            &post_count,
            |b, _| b.iter(|| LinearScan.join(black_box(posts), black_box(comments))),
        );

        group.bench_with_input(
            BenchmarkId::new("grouped_map", post_count),
            &post_count,
            |b, _| b.iter(|| GroupedMap.join(black_box(posts), black_box(comments))),
        );

        group.bench_with_input(
            BenchmarkId::new("keyed_object", post_count),
            &post_count,
            |b, _| b.iter(|| KeyedObject::new().join(black_box(posts), black_box(comments))),
        );
    }

    group.finish();
}
