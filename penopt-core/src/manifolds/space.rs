//! Space abstractions with manifold-style retraction updates.

/// Trait that represents an abstract optimization space.
///
/// The interface is intentionally small. Solvers work with:
/// - points (`x`) on the space
/// - local update vectors (`direction`) used by `retract_into`
pub trait Space {
    type Point: Clone;
    type Tangent: Clone;

    fn zero_like(&self, x: &Self::Point) -> Self::Point;

    /// Tangent/local zero vector at `x`.
    fn zero_tangent_like(&self, x: &Self::Point) -> Self::Tangent;

    /// Norm on the local update vector.
    fn tangent_norm(&self, v: &Self::Tangent) -> f64;

    // --- core ops (allocation-free if impl does it right) ---
    fn scale_into(&self, out: &mut Self::Tangent, v: &Self::Tangent, alpha: f64);
    fn add_into(&self, out: &mut Self::Point, x: &Self::Point, v: &Self::Tangent);
    fn difference_into(&self, out: &mut Self::Tangent, x: &Self::Point, y: &Self::Point);

    /// out = Retr_x(alpha * direction)
    fn retract_into(
        &self,
        out: &mut Self::Point,
        x: &Self::Point,
        direction: &Self::Tangent,
        alpha: f64,
        tmp: &mut Self::Tangent,
    ) {
        self.scale_into(tmp, direction, alpha);
        self.add_into(out, x, tmp);
    }
}
