// benches/bag_operations.rs

use array_bag::{ArrayBag, Bag};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn create_bag(size: u32) -> ArrayBag<u32> {
    let mut bag = ArrayBag::new();
    for i in 0..size {
        bag.add(i % 64).unwrap();
    }
    bag
}

fn bench_add(c: &mut Criterion) {
    let sizes = vec![100u32, 1_000, 5_000];

    let mut group = c.benchmark_group("add");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(create_bag(size)));
        });
    }
    group.finish();
}

fn bench_frequency_of(c: &mut Criterion) {
    let sizes = vec![100u32, 1_000, 5_000];

    let mut group = c.benchmark_group("frequency_of");
    for size in sizes {
        let bag = create_bag(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| bag.frequency_of(black_box(&7)).unwrap());
        });
    }
    group.finish();
}

fn bench_remove_entry(c: &mut Criterion) {
    let sizes = vec![100u32, 1_000, 5_000];

    let mut group = c.benchmark_group("remove_entry");
    for size in sizes {
        let bag = create_bag(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || bag.clone(),
                |mut bag| {
                    // Front element: removal swaps the last one in.
                    bag.remove_entry(black_box(&0)).unwrap()
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let sizes = vec![100u32, 1_000, 5_000];

    let mut group = c.benchmark_group("drain");
    for size in sizes {
        let bag = create_bag(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || bag.clone(),
                |mut bag| {
                    while bag.remove().unwrap().is_some() {}
                    bag
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_add,
    bench_frequency_of,
    bench_remove_entry,
    bench_drain
);
criterion_main!(benches);
