use penopt::{problems::box_volume::BoxVolume, solvers::continuation::sweep_penalty};

fn main() {
    let x = [1.0, 1.0, 1.0];
    let schedule = [10.0, 1.0, 0.5, 0.1, 0.05, 0.01];

    println!("penalty value at x=({}, {}, {}) without optimizing:", x[0], x[1], x[2]);
    let points = sweep_penalty(&BoxVolume, &x, &schedule).expect("schedule is valid");
    for p in points {
        println!("r={:>6.2} -> penalty={:.6}", p.r, p.penalty);
    }
}
