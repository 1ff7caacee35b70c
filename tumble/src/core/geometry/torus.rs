use std::f64::consts::TAU;

use super::manifold::Manifold;
use glam::DVec3;

/// Wraps an angle in radians into `[0, 2π)`.
///
/// Negative angles are lifted by whole turns, anything at or past a full
/// turn is reduced with a single modulo. For angles in `(-2π, 0)` this is
/// exactly `n + 2π`. Non-finite input yields NaN.
pub fn normalize_angle(n: f64) -> f64 {
    let mut n = n;
    if n < 0.0 {
        n = n % TAU + TAU;
    }
    if n >= TAU {
        n %= TAU;
    }
    n
}

/// Three independent angles, each on the circle `[0, 2π)`.
/// Angular positions live here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Torus3;

impl Torus3 {
    pub fn normalize(p: DVec3) -> DVec3 {
        DVec3::new(normalize_angle(p.x), normalize_angle(p.y), normalize_angle(p.z))
    }
}

impl Manifold for Torus3 {
    type Point = DVec3;
    type Tangent = DVec3;

    fn retract(p: Self::Point, v: Self::Tangent) -> Self::Point {
        Self::normalize(p + v)
    }
}
