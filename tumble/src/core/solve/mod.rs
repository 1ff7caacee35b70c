use crate::core::body::InertiaTensor;
use crate::core::geometry::{Euclidean3, Manifold, Torus3};
use crate::core::state::RotationalState;
use crate::error::Result;
use crate::laws::classical::angular_acceleration;

/// A single-step scheme for torque-free rotation.
///
/// A step is split in two so that callers can observe the state between
/// evaluating the accelerations and applying them.
pub trait Integrator {
    /// Evaluates the accelerations for the current velocities, keeping the
    /// previous ones in `alpha_old`.
    fn accelerate(&mut self, state: &mut RotationalState, inertia: &InertiaTensor) -> Result<()>;

    /// Applies the accelerations from [`Integrator::accelerate`] and moves
    /// time forward by `dt`.
    fn advance(&mut self, state: &mut RotationalState, dt: f64);
}

/// First-order explicit Euler.
///
/// Accelerations are frozen at the start of the step, velocities are kicked
/// with them, and the angles drift with the already-updated velocities. The
/// scheme is neither symplectic nor energy preserving and its drift is left
/// as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitEuler;

impl Integrator for ExplicitEuler {
    fn accelerate(&mut self, state: &mut RotationalState, inertia: &InertiaTensor) -> Result<()> {
        state.alpha_old = state.alpha;
        state.alpha = angular_acceleration(state.omega, inertia.moments())?;
        Ok(())
    }

    fn advance(&mut self, state: &mut RotationalState, dt: f64) {
        // 1. Kick W += a * dt
        state.omega = Euclidean3::retract(state.omega, state.alpha * dt);

        // 2. Drift x += W * dt, wrapped
        state.angle = Torus3::retract(state.angle, state.omega * dt);

        state.t += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn velocity_uses_start_of_step_acceleration() {
        let inertia = InertiaTensor::new(3.0, 4.0, 2.0).unwrap();
        let mut state = RotationalState::new(0.0, DVec3::ZERO, DVec3::new(1.0, 0.5, 0.25));
        let mut solver = ExplicitEuler;
        let dt = 0.01;

        solver.accelerate(&mut state, &inertia).unwrap();
        let alpha = state.alpha;
        solver.advance(&mut state, dt);

        assert_eq!(state.omega, DVec3::new(1.0, 0.5, 0.25) + alpha * dt);
        assert_eq!(state.angle, state.omega * dt);
        assert_eq!(state.t, dt);
    }

    #[test]
    fn previous_acceleration_is_kept() {
        let inertia = InertiaTensor::new(1.0, 2.0, 3.0).unwrap();
        let mut state = RotationalState::new(0.0, DVec3::ZERO, DVec3::new(0.3, 2.0, 0.1));
        let mut solver = ExplicitEuler;

        solver.accelerate(&mut state, &inertia).unwrap();
        let first = state.alpha;
        solver.advance(&mut state, 0.1);
        solver.accelerate(&mut state, &inertia).unwrap();

        assert_eq!(state.alpha_old, first);
        assert_ne!(state.alpha, first);
    }
}
