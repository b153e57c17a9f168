use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmat::{count_matching, SparseMatrix};

fn random_coordinates(count: usize, span: usize) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| (rng.gen_range(0..span), rng.gen_range(0..span)))
        .collect()
}

fn filled(coords: &[(usize, usize)]) -> SparseMatrix<f64> {
    let mut matrix = SparseMatrix::new();
    for (i, &(row, column)) in coords.iter().enumerate() {
        matrix.add(row, column, i as f64).unwrap();
    }
    matrix
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &count in &[1_000usize, 10_000, 100_000] {
        let coords = random_coordinates(count, 1_000_000);
        group.bench_with_input(BenchmarkId::from_parameter(count), &coords, |b, coords| {
            b.iter(|| filled(black_box(coords)))
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let coords = random_coordinates(100_000, 1_000_000);
    let matrix = filled(&coords);
    let probes = random_coordinates(10_000, 1_000_000);

    c.bench_function("lookup_mixed_hits", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for &(row, column) in coords.iter().take(5_000).chain(probes.iter().take(5_000)) {
                sum += matrix.get(black_box(row), black_box(column));
            }
            sum
        })
    });
}

fn bench_iterate_and_count(c: &mut Criterion) {
    let matrix = filled(&random_coordinates(100_000, 1_000_000));

    c.bench_function("iterate_100k", |b| {
        b.iter(|| matrix.iter().map(|e| e.value).sum::<f64>())
    });
    c.bench_function("count_matching_100k", |b| {
        b.iter(|| count_matching(&matrix, |v| *v > 50_000.0))
    });
    c.bench_function("try_clone_100k", |b| b.iter(|| matrix.try_clone().unwrap()));
}

criterion_group!(benches, bench_insert, bench_lookup, bench_iterate_and_count);
criterion_main!(benches);
