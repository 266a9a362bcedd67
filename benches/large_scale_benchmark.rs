use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use flagsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_few_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M u32, 16 Keys");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30)); // Large inputs take a while to clone per batch

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;
    let input: Vec<u32> = (0..count).map(|_| rng.random_range(0..16)).collect();

    group.throughput(Throughput::Elements(count as u64));

    // Flagsort over a slice
    group.bench_function("flagsort (in-place)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| {
                sort(black_box(&mut data));
            },
            BatchSize::LargeInput,
        )
    });

    // Flagsort over raw memory
    group.bench_function("flagsort (raw buffer)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| {
                sort(black_box(&mut RawBuffer::from_slice(&mut data)));
            },
            BatchSize::LargeInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_few_keys);
criterion_main!(benches);
