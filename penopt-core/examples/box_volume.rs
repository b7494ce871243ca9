use penopt::{
    manifolds::EuclideanSpace, problems::box_volume::BoxVolume,
    solvers::continuation::PenaltyContinuation, solvers::gd::GradientDescent,
};

fn main() {
    let start_points = [
        ("X0", vec![0.0, 0.0, 0.0]),
        ("X1", vec![1.0, 1.0, 1.0]),
        ("Xm", vec![0.9, 0.7, 0.7]),
    ];

    let driver = PenaltyContinuation {
        solver: GradientDescent {
            space: EuclideanSpace,
            step_size: 1e-3,
            max_iters: 20_000,
            tol: 1e-6,
            verbose: false,
            collect_trace: false,
        },
        schedule: vec![10.0, 1.0, 0.5, 0.1, 0.05, 0.01],
        verbose: false,
    };

    for (name, x0) in start_points {
        println!("\nStarting optimization from {name}:");

        let run = driver
            .solve(&BoxVolume, x0)
            .expect("configuration is valid");

        for s in &run.stages {
            println!(
                "r={:.2} -> x=({:.6}, {:.6}, {:.6}), volume={:.6}, penalty={:.6}, iterations={}, evaluations={}",
                s.r, s.x[0], s.x[1], s.x[2], -s.objective, s.penalty, s.iters, s.func_evals
            );
        }
        println!(
            "total: {} iterations, {} gradient evaluations",
            run.total_iters, run.total_func_evals
        );
    }
}
