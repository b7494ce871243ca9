use penopt::{problems::box_volume::BoxVolume, solvers::continuation::PenaltyContinuation};

fn main() {
    let mut driver = PenaltyContinuation::new(vec![10.0, 1.0, 0.5, 0.1, 0.05, 0.01]);
    driver.solver.max_iters = 20_000;

    let run = driver
        .solve(&BoxVolume, vec![1.0, 1.0, 1.0])
        .expect("configuration is valid");

    println!(
        "{}",
        serde_json::to_string_pretty(&run).expect("run serializes")
    );
}
