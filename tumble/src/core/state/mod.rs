use glam::DVec3;

use crate::core::geometry::Torus3;

/// The rotational state of a single rigid body.
///
/// Angles, angular velocities and accelerations are expressed about the
/// body-fixed principal axes (x, y, z). One instance is owned by a running
/// trajectory and mutated in place once per internal step; what leaves the
/// engine are snapshots of it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationalState {
    /// Current time of the state snapshot.
    pub t: f64,

    /// Angular positions in radians, each kept in `[0, 2π)`.
    pub angle: DVec3,

    /// Angular velocities (W).
    pub omega: DVec3,

    /// Angular accelerations evaluated from `omega` at the start of the step.
    pub alpha: DVec3,

    /// Accelerations from the previous internal step. The intermediate-axis
    /// flip counter compares against these; jerk over a sampled interval is
    /// tracked by the sampler instead.
    pub alpha_old: DVec3,

    /// Angular jerk (time derivative of `alpha`) over the last sampled interval.
    pub jerk: DVec3,
}

impl RotationalState {
    /// Initial state at time `t`. Angles may be given in any range; they are
    /// wrapped here.
    pub fn new(t: f64, angle: DVec3, omega: DVec3) -> Self {
        Self {
            t,
            angle: Torus3::normalize(angle),
            omega,
            ..Default::default()
        }
    }
}
