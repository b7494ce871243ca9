use serde::{Deserialize, Serialize};

use crate::manifolds::EuclideanSpace;
use crate::solvers::gd::GradientDescent;

/// Exterior-penalty continuation driver.
///
/// Runs the inner solver once per schedule entry, wrapping the problem in a
/// `QuadraticPenalty` at that entry's parameter and seeding each stage with
/// the previous stage's final point. The schedule is used in the given
/// order; in practice it decreases so that constraint enforcement sharpens
/// as the iterate approaches the feasible set.
#[derive(Clone, Debug)]
pub struct PenaltyContinuation {
    /// Inner unconstrained solver, reused for every stage.
    pub solver: GradientDescent<EuclideanSpace>,
    /// Ordered penalty parameters, one stage each.
    pub schedule: Vec<f64>,
    /// If true, prints one diagnostic row per stage.
    pub verbose: bool,
}

impl PenaltyContinuation {
    /// Build a driver with solver defaults for the given schedule.
    pub fn new(schedule: Vec<f64>) -> Self {
        Self {
            solver: GradientDescent::new(),
            schedule,
            verbose: false,
        }
    }
}

/// Outcome of a single continuation stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StageResult {
    /// Penalty parameter of this stage.
    pub r: f64,
    /// Final point of the stage, fed into the next stage.
    pub x: Vec<f64>,
    /// Objective value at `x` (for the box problem, volume is `-objective`).
    pub objective: f64,
    /// Penalty value at `x` under this stage's `r`.
    pub penalty: f64,
    /// Committed solver steps.
    pub iters: usize,
    /// Gradient evaluations performed.
    pub func_evals: usize,
    /// Whether a stopping criterion fired before the iteration cap.
    pub converged: bool,
}

/// Outcome of a full continuation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContinuationResult {
    /// Per-stage outcomes, in schedule order.
    pub stages: Vec<StageResult>,
    /// Final point after the last stage.
    pub x: Vec<f64>,
    /// Objective value at the final point.
    pub objective: f64,
    /// Iteration count summed over all stages.
    pub total_iters: usize,
    /// Gradient evaluation count summed over all stages.
    pub total_func_evals: usize,
}

/// One entry of a penalty sweep: the penalty value at a fixed point.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SweepPoint {
    pub r: f64,
    pub penalty: f64,
}
