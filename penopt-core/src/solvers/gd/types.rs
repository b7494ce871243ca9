use crate::error::ConfigError;
use crate::manifolds::{space::Space, EuclideanSpace};
use crate::solvers::SolverTraceRecord;

/// Configuration for fixed-step gradient descent.
#[derive(Clone, Debug)]
pub struct GradientDescent<S: Space = EuclideanSpace> {
    /// Space to operate on.
    pub space: S,
    /// Learning rate / step size.
    pub step_size: f64,
    /// Maximum number of iteration attempts.
    pub max_iters: usize,
    /// Convergence threshold, applied to both the gradient norm and the
    /// displacement of a candidate step.
    pub tol: f64,
    /// If true, prints per-iteration diagnostics (f, |grad|, step size).
    pub verbose: bool,
    /// If true, stores per-iteration trace rows into the result.
    pub collect_trace: bool,
}

impl<S: Space> GradientDescent<S> {
    /// Build a solver on an explicitly provided space.
    pub fn with_space(space: S) -> Self {
        Self {
            space,
            step_size: 1e-3,
            max_iters: 1000,
            tol: 1e-6,
            verbose: false,
            collect_trace: false,
        }
    }

    /// Check the configuration invariants without running.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step_size > 0.0 && self.step_size.is_finite()) {
            return Err(ConfigError::StepSize(self.step_size));
        }
        if !(self.tol > 0.0 && self.tol.is_finite()) {
            return Err(ConfigError::Tolerance(self.tol));
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(())
    }
}

impl GradientDescent<EuclideanSpace> {
    /// Build a solver with Euclidean space defaults.
    pub fn new() -> Self {
        Self::with_space(EuclideanSpace)
    }
}

impl Default for GradientDescent<EuclideanSpace> {
    fn default() -> Self {
        Self::new()
    }
}

/// Struct that holds the optimization result.
///
/// `func_evals` counts gradient evaluations: one per attempted iteration,
/// including the evaluation that triggered a stopping criterion. `iters`
/// counts committed steps only, so `func_evals` is `iters` when the run hit
/// the iteration cap and `iters + 1` otherwise.
#[derive(Clone, Debug)]
pub struct OptimizeResult<P> {
    pub x: P,
    pub f: f64,
    pub iters: usize,
    pub func_evals: usize,
    pub grad_norm: f64,
    pub dx_norm: f64,
    pub converged: bool,
    pub trace: Option<Vec<SolverTraceRecord>>,
}
