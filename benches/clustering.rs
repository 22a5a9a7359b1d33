use criterion::{black_box, criterion_group, criterion_main, Criterion};
use densa::{Dbscan, LinearScan, RegionQuery};
use rand::prelude::*;

fn blobs(rng: &mut StdRng, n: usize, d: usize, centers: usize) -> Vec<Vec<f32>> {
    (0..n)
        .map(|i| {
            let offset = (i % centers) as f32 * 10.0;
            (0..d).map(|_| offset + rng.random::<f32>()).collect()
        })
        .collect()
}

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let data = blobs(&mut rng, 1000, 16, 10);

    group.bench_function("cluster_n1000_d16", |b| {
        let model = Dbscan::new(1.5, 5).unwrap();
        b.iter(|| model.cluster(black_box(&data)))
    });

    group.bench_function("region_query_n1000_d16", |b| {
        let scan = LinearScan::new(&data);
        b.iter(|| scan.region_query(black_box(0), 1.5))
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
