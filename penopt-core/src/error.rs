//! Configuration errors reported at the continuation boundary.

use thiserror::Error;

/// Rejected solver or schedule configuration.
///
/// Raised before any numeric work; a degenerate configuration would
/// otherwise stall the solver or drive it to NaN.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Step size must be positive and finite.
    #[error("step size must be positive and finite (got {0})")]
    StepSize(f64),

    /// Tolerance must be positive and finite.
    #[error("tolerance must be positive and finite (got {0})")]
    Tolerance(f64),

    /// The iteration cap must allow at least one attempt.
    #[error("max_iters must be at least 1")]
    MaxIters,

    /// The penalty parameter schedule has no entries.
    #[error("penalty parameter schedule is empty")]
    EmptySchedule,

    /// Every schedule entry must be positive and finite.
    #[error("penalty parameter must be positive and finite (got {0})")]
    PenaltyParameter(f64),

    /// Start point length does not match the problem dimension.
    #[error("start point has dimension {got}, problem expects {expected}")]
    Dimension { expected: usize, got: usize },
}
