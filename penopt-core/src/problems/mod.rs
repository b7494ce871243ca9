pub mod box_volume;
pub mod constrained;
pub mod objective;
pub mod penalty;

pub use box_volume::BoxVolume;
pub use constrained::ConstrainedProblem;
pub use objective::Objective;
pub use penalty::QuadraticPenalty;
