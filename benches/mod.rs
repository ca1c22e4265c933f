use criterion::{criterion_group, criterion_main};

mod join;

use index_build::register_benchmarks as register_index_benchmarks;
use join::register_benchmarks as register_join_benchmarks;

// Define the benchmark groups
criterion_group!(benches, register_join_benchmarks, register_index_benchmarks);

criterion_main!(benches);
