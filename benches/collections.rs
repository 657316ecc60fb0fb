use std::collections::{BTreeMap, BTreeSet};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use non_empty_collections::{NonEmptyList, NonEmptyMap, NonEmptySet};

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_empty_map");
    for size in [16usize, 256, 4096] {
        let rest: BTreeMap<u64, u64> = (1..size as u64).map(|k| (k * 2, k)).collect();
        let map = NonEmptyMap::with_pair(0, 0, rest);

        group.bench_with_input(BenchmarkId::new("insert_new_head", size), &map, |b, map| {
            b.iter(|| black_box(map.clone().insert(u64::MAX, 1)))
        });
        group.bench_with_input(BenchmarkId::new("remove_head", size), &map, |b, map| {
            b.iter(|| black_box(map.clone().remove(&0)))
        });
        group.bench_with_input(BenchmarkId::new("map_keys", size), &map, |b, map| {
            b.iter(|| black_box(map.clone().map(|k, v| (u64::MAX - k, v))))
        });
        group.bench_with_input(BenchmarkId::new("union", size), &map, |b, map| {
            b.iter(|| black_box(map.clone().union(map.clone())))
        });
    }
    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_empty_set");
    for size in [16u64, 256, 4096] {
        let set = NonEmptySet::with_value(size, (0..size).collect::<BTreeSet<_>>());
        group.bench_with_input(BenchmarkId::new("with_value", size), &set, |b, set| {
            b.iter(|| black_box(NonEmptySet::with_value(size + 1, set.rest().clone())))
        });
    }
    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_empty_list");
    for size in [16i64, 256, 4096] {
        let Some(list) = NonEmptyList::from_iter_opt((0..size).rev()) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("sort", size), &list, |b, list| {
            b.iter(|| black_box(list.clone().sort()))
        });
        group.bench_with_input(BenchmarkId::new("filter", size), &list, |b, list| {
            b.iter(|| black_box(list.clone().filter(|x| x % 3 == 0)))
        });
        group.bench_with_input(BenchmarkId::new("sum", size), &list, |b, list| {
            b.iter(|| black_box(list.clone().sum()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_map, bench_set, bench_list);
criterion_main!(benches);
