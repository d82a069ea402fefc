//! Queue Performance Benchmarks
//!
//! Measures insertion and removal throughput at both ends, in-place reversal
//! and merge sort over queues of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};

use strqueue::queue::StrQueue;

const SIZES: [usize; 4] = [1_000, 10_000, 50_000, 100_000];

/// Deterministically scrambled payloads for sort benchmarks
fn create_test_values(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("value-{:08}", (i as u64 * 2_654_435_761) % count as u64))
        .collect()
}

fn create_queue(values: &[String]) -> StrQueue {
    let mut queue = StrQueue::new();
    for value in values {
        queue.insert_tail(value).unwrap();
    }
    queue
}

/// Benchmark insertion at each end followed by draining from the head
fn bench_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove");

    for count in SIZES {
        let values = create_test_values(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("insert_tail", count), &values, |b, values| {
            b.iter(|| {
                let queue = create_queue(values);
                black_box(queue.size())
            })
        });

        group.bench_with_input(BenchmarkId::new("insert_head", count), &values, |b, values| {
            b.iter(|| {
                let mut queue = StrQueue::new();
                for value in values {
                    queue.insert_head(value).unwrap();
                }
                black_box(queue.size())
            })
        });

        group.bench_with_input(BenchmarkId::new("remove_head", count), &values, |b, values| {
            b.iter_batched(
                || create_queue(values),
                |mut queue| {
                    let mut buf = [0u8; 32];
                    while queue.remove_head_into(Some(&mut buf[..])).is_ok() {}
                    queue
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Benchmark in-place reversal
fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");

    for count in SIZES {
        let mut queue = create_queue(&create_test_values(count));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                queue.reverse();
                black_box(queue.front().map(str::len))
            })
        });
    }

    group.finish();
}

/// Benchmark merge sort on scrambled and already sorted input
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for count in SIZES {
        let values = create_test_values(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("scrambled", count), &values, |b, values| {
            b.iter_batched(
                || create_queue(values),
                |mut queue| {
                    queue.sort();
                    queue
                },
                BatchSize::LargeInput,
            )
        });

        let mut sorted = values.clone();
        sorted.sort();
        group.bench_with_input(BenchmarkId::new("presorted", count), &sorted, |b, values| {
            b.iter_batched(
                || create_queue(values),
                |mut queue| {
                    queue.sort();
                    queue
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert_remove, bench_reverse, bench_sort);
criterion_main!(benches);
