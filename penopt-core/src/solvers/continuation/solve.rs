use crate::error::ConfigError;
use crate::problems::constrained::ConstrainedProblem;
use crate::problems::objective::Objective;
use crate::problems::penalty::QuadraticPenalty;
use crate::solvers::common::trace::{SolverTracer, TraceRow};

use super::types::{ContinuationResult, PenaltyContinuation, StageResult, SweepPoint};

fn validate_schedule(schedule: &[f64]) -> Result<(), ConfigError> {
    if schedule.is_empty() {
        return Err(ConfigError::EmptySchedule);
    }
    for &r in schedule {
        if !(r > 0.0 && r.is_finite()) {
            return Err(ConfigError::PenaltyParameter(r));
        }
    }
    Ok(())
}

impl PenaltyContinuation {
    /// Check the solver configuration and the schedule without running.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solver.validate()?;
        validate_schedule(&self.schedule)
    }

    /// Solve `problem` from `x0` across the whole schedule.
    ///
    /// Each stage minimizes the penalty function at its `r` and hands its
    /// final point to the next stage. A stage that hits the iteration cap
    /// still feeds its point forward; nothing is retried.
    pub fn solve<P: ConstrainedProblem>(
        &self,
        problem: &P,
        x0: Vec<f64>,
    ) -> Result<ContinuationResult, ConfigError> {
        self.validate()?;
        if x0.len() != problem.dim() {
            return Err(ConfigError::Dimension {
                expected: problem.dim(),
                got: x0.len(),
            });
        }

        let trace = SolverTracer::continuation(self.verbose);

        let mut x = x0;
        let mut stages = Vec::with_capacity(self.schedule.len());
        let mut total_iters = 0;
        let mut total_func_evals = 0;

        for (stage, &r) in self.schedule.iter().enumerate() {
            let penalty = QuadraticPenalty::new(problem, r);
            let result = self.solver.minimize(&penalty, x);

            total_iters += result.iters;
            total_func_evals += result.func_evals;

            let objective = problem.objective(&result.x);
            trace.emit(
                TraceRow::iter(stage)
                    .r(r)
                    .f(result.f)
                    .objective(objective)
                    .grad_norm(result.grad_norm)
                    .note(if result.converged {
                        "stage converged"
                    } else {
                        "iteration cap"
                    }),
            );

            stages.push(StageResult {
                r,
                x: result.x.clone(),
                objective,
                penalty: result.f,
                iters: result.iters,
                func_evals: result.func_evals,
                converged: result.converged,
            });
            x = result.x;
        }

        let objective = problem.objective(&x);
        Ok(ContinuationResult {
            stages,
            x,
            objective,
            total_iters,
            total_func_evals,
        })
    }
}

/// Evaluate the penalty value across a schedule at a fixed point, without
/// optimizing. A diagnostic for judging how a schedule weights the current
/// constraint violation.
pub fn sweep_penalty<P: ConstrainedProblem>(
    problem: &P,
    x: &[f64],
    schedule: &[f64],
) -> Result<Vec<SweepPoint>, ConfigError> {
    validate_schedule(schedule)?;
    if x.len() != problem.dim() {
        return Err(ConfigError::Dimension {
            expected: problem.dim(),
            got: x.len(),
        });
    }

    let x = x.to_vec();
    Ok(schedule
        .iter()
        .map(|&r| SweepPoint {
            r,
            penalty: QuadraticPenalty::new(problem, r).value(&x),
        })
        .collect())
}
