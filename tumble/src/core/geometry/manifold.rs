use std::ops::{Add, Mul, Neg, Sub};

/// A space on which the integrator moves a point along a tangent vector.
/// This separates the "State" (Point) from the "Change" (Tangent), so the
/// same explicit step can advance unbounded velocities and wrapped angles.
pub trait Manifold {
    /// The point on the manifold (e.g., a set of wrapped angles, a velocity vector).
    type Point: Clone + Copy + std::fmt::Debug;

    /// The vector in the tangent space (e.g., an angular displacement).
    type Tangent: Clone
        + Copy
        + std::fmt::Debug
        + Add<Output = Self::Tangent>
        + Sub<Output = Self::Tangent>
        + Neg<Output = Self::Tangent>
        + Mul<f64, Output = Self::Tangent>;

    /// Moves a point `p` along the tangent vector `v`.
    /// For vector spaces, this is `p + v`.
    /// For the angle torus, this is `p + v` wrapped back into `[0, 2π)`.
    fn retract(p: Self::Point, v: Self::Tangent) -> Self::Point;
}
