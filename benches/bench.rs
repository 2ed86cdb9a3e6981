use std::hint::black_box;

use classic_sort_rs::{binary_search_iterative, binary_search_recursive, Algorithm};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use sort_test_tools::patterns;

const BENCH_SIZES: [usize; 3] = [16, 128, 1_024];

fn bench_sorts(c: &mut Criterion) {
    let pattern_fns: [(&str, fn(usize) -> Vec<i32>); 5] = [
        ("random", patterns::random),
        ("random_zipf", |len| patterns::random_zipf(len, 1.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saw_mixed", |len| patterns::saw_mixed(len, 8)),
    ];

    for (pattern_name, pattern_fn) in pattern_fns {
        let mut group = c.benchmark_group(format!("sort/{pattern_name}"));

        for len in BENCH_SIZES {
            let input = pattern_fn(len);

            for algorithm in Algorithm::ALL {
                let id = BenchmarkId::new(algorithm.name(), len);
                group.bench_with_input(id, &input, |b, input| {
                    b.iter_batched_ref(
                        || input.clone(),
                        |v| algorithm.sort(black_box(v.as_mut_slice())),
                        BatchSize::SmallInput,
                    )
                });
            }
        }

        group.finish();
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search");

    for len in BENCH_SIZES {
        let v = patterns::random_sorted(len);
        let targets = patterns::random(len);

        group.bench_with_input(BenchmarkId::new("iterative", len), &v, |b, v| {
            b.iter(|| {
                targets
                    .iter()
                    .filter(|&target| {
                        binary_search_iterative(black_box(v.as_slice()), target).is_some()
                    })
                    .count()
            })
        });

        group.bench_with_input(BenchmarkId::new("recursive", len), &v, |b, v| {
            b.iter(|| {
                targets
                    .iter()
                    .filter(|&target| {
                        binary_search_recursive(black_box(v.as_slice()), target).is_some()
                    })
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sorts, bench_search);
criterion_main!(benches);
