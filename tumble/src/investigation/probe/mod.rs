use crate::core::body::InertiaTensor;
use crate::core::state::RotationalState;

/// A synchronous probe that extracts a scalar value from the rotational state.
///
/// Both quantities below are conserved by the exact torque-free dynamics, so
/// their change over a run measures the integrator's drift.
pub trait Probe {
    fn name(&self) -> &str;
    fn measure(&self, state: &RotationalState, inertia: &InertiaTensor) -> f64;
}

pub struct RotationalEnergyProbe;

impl Probe for RotationalEnergyProbe {
    fn name(&self) -> &str {
        "Rotational Energy"
    }

    fn measure(&self, state: &RotationalState, inertia: &InertiaTensor) -> f64 {
        // T_rot = 0.5 * w . (I * w)
        let w = state.omega;
        0.5 * w.dot(w * inertia.moments())
    }
}

pub struct AngularMomentumProbe;

impl Probe for AngularMomentumProbe {
    fn name(&self) -> &str {
        "Angular Momentum"
    }

    fn measure(&self, state: &RotationalState, inertia: &InertiaTensor) -> f64 {
        // |L| = |I * w|
        (state.omega * inertia.moments()).length()
    }
}

/// Relative change `(last - first) / |first|`, or the absolute change when
/// the first value is zero.
pub fn relative_drift(first: f64, last: f64) -> f64 {
    if first == 0.0 {
        last - first
    } else {
        (last - first) / first.abs()
    }
}
