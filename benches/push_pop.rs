use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use min_heap::MinHeap;

fn random_ints(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0, 1_000_000)).collect()
}

pub fn push_pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_heap");
    for size in [1_000usize, 10_000, 100_000].iter() {
        let items = random_ints(*size, 7);

        group.bench_with_input(BenchmarkId::new("push_then_pop", size), &items, |b, items| {
            b.iter(|| {
                let mut heap = MinHeap::with_capacity(items.len(), |x: &i64, y: &i64| x < y);
                for &x in items {
                    heap.push(x);
                }
                while let Some(x) = heap.pop() {
                    black_box(x);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("push_all", size), &items, |b, items| {
            b.iter(|| {
                let mut heap = MinHeap::new(|x: &i64, y: &i64| x < y);
                heap.push_all(items.iter().copied());
                black_box(heap.peek().copied())
            })
        });
        group.bench_with_input(BenchmarkId::new("from_vec", size), &items, |b, items| {
            b.iter(|| {
                let heap = MinHeap::from_vec(items.clone(), |x: &i64, y: &i64| x < y);
                black_box(heap.peek().copied())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, push_pop_benchmark);
criterion_main!(benches);
