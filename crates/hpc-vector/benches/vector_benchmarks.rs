//! Benchmarks for the elementwise kernels

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hpc_core::{scalar_sequential, simd_sequential};
use hpc_vector::{ElementwiseOp, VectorKernel};

fn generate(size: usize, shift: f64) -> Vec<f64> {
    (0..size).map(|i| shift + (i as f64 * 0.01).sin()).collect()
}

fn bench_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_kernel");

    for &size in &[1_000usize, 100_000, 1_000_000] {
        let a = generate(size, 0.0);
        let b = generate(size, 2.0);
        let scalar = VectorKernel::new(scalar_sequential());
        let simd = VectorKernel::new(simd_sequential());

        for op in ElementwiseOp::ALL {
            group.bench_with_input(
                BenchmarkId::new(format!("scalar_{}", op.name()), size),
                &size,
                |bench, _| bench.iter(|| black_box(scalar.apply(op, &a, &b).unwrap())),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("simd_{}", op.name()), size),
                &size,
                |bench, _| bench.iter(|| black_box(simd.apply(op, &a, &b).unwrap())),
            );
        }

        #[cfg(feature = "parallel")]
        {
            let parallel = VectorKernel::new(hpc_core::simd_parallel());
            group.bench_with_input(BenchmarkId::new("parallel_vecadd", size), &size, |bench, _| {
                bench.iter(|| black_box(parallel.add(&a, &b).unwrap()))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
