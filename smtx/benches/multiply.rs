//! Naive vs parallel sparse multiplication

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smtx::{par_multiply, SparseMatrix};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize, entries: usize) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(rows, cols);
    for _ in 0..entries {
        matrix.set(
            rng.gen_range(0..rows),
            rng.gen_range(0..cols),
            rng.gen_range(-100..=100),
        );
    }
    matrix
}

fn bench_multiply(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("multiply");

    for &entries in &[100usize, 400, 1600] {
        let lhs = random_matrix(&mut rng, 128, 128, entries);
        let rhs = random_matrix(&mut rng, 128, 128, entries);

        group.bench_with_input(BenchmarkId::new("naive", entries), &entries, |bench, _| {
            bench.iter(|| lhs.mul(&rhs).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("parallel", entries),
            &entries,
            |bench, _| bench.iter(|| par_multiply(&lhs, &rhs).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
