use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use probe_lib::collections::hash::{ChainedHashTable, OpenAddressingHashTable};

const SIZES: [u64; 3] = [100, 1_000, 10_000];

pub fn put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");
    for size in SIZES.iter() {
        group.bench_with_input(BenchmarkId::new("chained", size), size, |b, &size| {
            b.iter(|| {
                let mut table = ChainedHashTable::with_cap(size as usize / 4);
                for i in 0..size {
                    table.put(black_box(i), i);
                }
                table
            })
        });
        group.bench_with_input(BenchmarkId::new("open", size), size, |b, &size| {
            b.iter(|| {
                let mut table = OpenAddressingHashTable::with_cap(size as usize / 4);
                for i in 0..size {
                    table.put(black_box(i), i);
                }
                table
            })
        });
    }
    group.finish()
}

pub fn get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for size in SIZES.iter() {
        let chained: ChainedHashTable<u64, u64> = (0..*size).map(|i| (i, i)).collect();
        group.bench_with_input(BenchmarkId::new("chained", size), size, |b, &size| {
            b.iter(|| {
                for i in 0..size {
                    let _ = black_box(chained.get(&i));
                }
            })
        });

        let open: OpenAddressingHashTable<u64, u64> = (0..*size).map(|i| (i, i)).collect();
        group.bench_with_input(BenchmarkId::new("open", size), size, |b, &size| {
            b.iter(|| {
                for i in 0..size {
                    let _ = black_box(open.get(&i));
                }
            })
        });
    }
    group.finish()
}

pub fn remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for size in [100_u64, 1_000].iter() {
        group.bench_with_input(BenchmarkId::new("chained", size), size, |b, &size| {
            b.iter_with_setup(
                || (0..size).map(|i| (i, i)).collect::<ChainedHashTable<u64, u64>>(),
                |mut table| {
                    for i in 0..size {
                        let _ = black_box(table.remove(&i));
                    }
                },
            )
        });
        group.bench_with_input(BenchmarkId::new("open", size), size, |b, &size| {
            b.iter_with_setup(
                || (0..size).map(|i| (i, i)).collect::<OpenAddressingHashTable<u64, u64>>(),
                |mut table| {
                    for i in 0..size {
                        let _ = black_box(table.remove(&i));
                    }
                },
            )
        });
    }
    group.finish()
}

criterion_group!(benches, put, get, remove);
criterion_main!(benches);
