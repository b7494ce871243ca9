//! Criterion benchmarks for the penalty continuation driver.
//! Schedule prefixes of the reference box problem, started from (1,1,1).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use penopt::{
    manifolds::EuclideanSpace, problems::box_volume::BoxVolume,
    solvers::continuation::PenaltyContinuation, solvers::gd::GradientDescent,
};

fn driver(schedule: Vec<f64>) -> PenaltyContinuation {
    PenaltyContinuation {
        solver: GradientDescent {
            space: EuclideanSpace,
            step_size: 1e-3,
            max_iters: 20_000,
            tol: 1e-6,
            verbose: false,
            collect_trace: false,
        },
        schedule,
        verbose: false,
    }
}

fn bench_continuation(c: &mut Criterion) {
    let full = [10.0, 1.0, 0.5, 0.1, 0.05, 0.01];
    let mut group = c.benchmark_group("continuation");
    for &stages in &[1usize, 3, 6] {
        group.bench_with_input(BenchmarkId::new("box_volume", stages), &stages, |b, &n| {
            let d = driver(full[..n].to_vec());
            b.iter(|| {
                let run = d.solve(&BoxVolume, vec![1.0, 1.0, 1.0]).unwrap();
                assert!(run.total_func_evals > 0);
                run
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_continuation);
criterion_main!(benches);
