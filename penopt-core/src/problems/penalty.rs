//! Quadratic exterior penalty formulation.

use crate::manifolds::EuclideanSpace;

use super::constrained::ConstrainedProblem;
use super::objective::Objective;

/// Exterior penalty wrapper around a constrained problem at a fixed penalty
/// parameter `r`.
///
/// `value(x) = f(x) + (1/r) * (sum_i g_i(x)^2 + sum_j max(0, h_j(x))^2)`
///
/// Equality residuals are penalized symmetrically. Inequality terms penalize
/// violation only: on the feasible side (`h_j <= 0`) they contribute zero
/// value and zero gradient, so the kink at the boundary resolves to the
/// inactive branch. Smaller `r` enforces the constraints harder.
#[derive(Clone, Copy, Debug)]
pub struct QuadraticPenalty<'a, P> {
    pub problem: &'a P,
    /// Penalty parameter; the violation terms are scaled by `1/r`.
    pub r: f64,
}

impl<'a, P: ConstrainedProblem> QuadraticPenalty<'a, P> {
    pub fn new(problem: &'a P, r: f64) -> Self {
        Self { problem, r }
    }
}

impl<P: ConstrainedProblem> Objective<EuclideanSpace> for QuadraticPenalty<'_, P> {
    fn value(&self, x: &Vec<f64>) -> f64 {
        let p = self.problem;
        let mut violation = 0.0;

        let mut g = vec![0.0; p.num_equalities()];
        p.equalities(x, &mut g);
        for gi in &g {
            violation += gi * gi;
        }

        let mut h = vec![0.0; p.num_inequalities()];
        p.inequalities(x, &mut h);
        for hj in &h {
            let v = hj.max(0.0);
            violation += v * v;
        }

        p.objective(x) + violation / self.r
    }

    fn gradient(&self, x: &Vec<f64>, grad: &mut Vec<f64>) {
        let p = self.problem;
        let w = 1.0 / self.r;

        p.objective_gradient(x, grad);

        let mut cgrad = vec![0.0; x.len()];

        // d/dx g_i^2 = 2 g_i ∇g_i
        let mut g = vec![0.0; p.num_equalities()];
        p.equalities(x, &mut g);
        for (i, &gi) in g.iter().enumerate() {
            p.equality_gradient(x, i, &mut cgrad);
            for (out, &d) in grad.iter_mut().zip(&cgrad) {
                *out += w * 2.0 * gi * d;
            }
        }

        // d/dx max(0, h_j)^2 = 2 h_j ∇h_j on the violated side, zero otherwise
        let mut h = vec![0.0; p.num_inequalities()];
        p.inequalities(x, &mut h);
        for (j, &hj) in h.iter().enumerate() {
            if hj > 0.0 {
                p.inequality_gradient(x, j, &mut cgrad);
                for (out, &d) in grad.iter_mut().zip(&cgrad) {
                    *out += w * 2.0 * hj * d;
                }
            }
        }
    }
}
