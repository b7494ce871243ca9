//! penopt: a small penalty-method optimization toolbox
//!
//! - `Space`: an abstraction of vector spaces
//! - `EuclideanSpace` (`Vec<f64>`): its concrete implementation
//! - `Objective`: a generic objective function interface
//! - `ConstrainedProblem`: an objective plus equality/inequality constraints
//! - `QuadraticPenalty`: exterior penalty turning a constrained problem into
//!   an unconstrained `Objective` at a fixed penalty parameter
//! - `GradientDescent`: a fixed-step gradient descent solver
//! - `PenaltyContinuation`: runs the solver over a decreasing schedule of
//!   penalty parameters, chaining the solution point between stages
//!
//! Start with constrained optimization on R^n via `PenaltyContinuation`.

pub mod error;
pub mod manifolds;
pub mod problems;
pub mod solvers;
