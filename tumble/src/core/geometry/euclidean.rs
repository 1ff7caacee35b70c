use super::manifold::Manifold;
use glam::DVec3;

/// Plain 3-space. Angular velocities live here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean3;

impl Manifold for Euclidean3 {
    type Point = DVec3;
    type Tangent = DVec3;

    fn retract(p: Self::Point, v: Self::Tangent) -> Self::Point {
        p + v
    }
}
