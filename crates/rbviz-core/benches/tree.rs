use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rbviz_core::RbTree;

fn scrambled(n: i64) -> Vec<i64> {
    // 7919 is prime, so this visits every residue once.
    (0..n).map(|i| (i * 7919) % n).collect()
}

fn bench_insert(c: &mut Criterion) {
    let keys = scrambled(10_000);
    c.bench_function("insert_10k_scrambled", |b| {
        b.iter(|| {
            let tree: RbTree<i64> = keys.iter().copied().collect();
            black_box(tree.len())
        })
    });
    c.bench_function("insert_10k_ascending", |b| {
        b.iter(|| {
            let tree: RbTree<i64> = (0..10_000).collect();
            black_box(tree.len())
        })
    });
}

fn bench_delete(c: &mut Criterion) {
    let keys = scrambled(10_000);
    c.bench_function("delete_10k_scrambled", |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<RbTree<i64>>(),
            |mut tree| {
                for k in &keys {
                    let _ = tree.delete(k);
                }
                black_box(tree.is_empty())
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_search(c: &mut Criterion) {
    let tree: RbTree<i64> = scrambled(10_000).into_iter().collect();
    c.bench_function("search_10k", |b| {
        b.iter(|| {
            let mut found = 0;
            for k in 0..10_000 {
                found += usize::from(tree.contains(black_box(&k)));
            }
            found
        })
    });
}

criterion_group!(benches, bench_insert, bench_delete, bench_search);
criterion_main!(benches);
