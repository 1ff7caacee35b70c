//! Stability diagnostics that run alongside the integrator.
//!
//! A tracker sees every internal step as an `(old, new)` pair of states and
//! keeps its own counters. The first step of a run has no predecessor and is
//! never compared.

use serde::{Deserialize, Serialize};

use crate::core::body::{Axis, InertiaTensor};
use crate::core::state::RotationalState;

/// Which instrumentation a run carries. At most one is active per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiagnosticsMode {
    #[default]
    None,
    /// Count sign changes of each angular-velocity component.
    SignChange,
    /// Count sign changes of the angular acceleration about the intermediate axis.
    IntermediateAxisFlip,
}

impl DiagnosticsMode {
    pub fn tracker(self, inertia: &InertiaTensor) -> Box<dyn Tracker> {
        match self {
            DiagnosticsMode::None => Box::new(NoDiagnostics),
            DiagnosticsMode::SignChange => Box::new(SignChangeCounter::default()),
            DiagnosticsMode::IntermediateAxisFlip => Box::new(IntermediateAxisFlipCounter::new(inertia)),
        }
    }
}

/// Counter values attached to every emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Counters {
    None,
    SignChanges { n_x: u64, n_y: u64, n_z: u64 },
    Flips { axis: Option<Axis>, n: u64 },
}

pub trait Tracker: Send {
    /// Compares two consecutive internal steps and returns the updated counters.
    fn on_step(&mut self, old: &RotationalState, new: &RotationalState) -> Counters;

    fn counters(&self) -> Counters;
}

/// Sign of `v` as -1, 0 or 1. Unlike `f64::signum`, both zeros map to 0, so
/// passing through exactly zero never registers as a change.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn flipped(old: f64, new: f64) -> bool {
    sign(old) * sign(new) < 0.0
}

#[derive(Debug, Default)]
pub struct NoDiagnostics;

impl Tracker for NoDiagnostics {
    fn on_step(&mut self, _old: &RotationalState, _new: &RotationalState) -> Counters {
        Counters::None
    }

    fn counters(&self) -> Counters {
        Counters::None
    }
}

/// Per-axis count of angular-velocity sign changes; a proxy for how often
/// the body oscillates about each axis.
#[derive(Debug, Default)]
pub struct SignChangeCounter {
    n: [u64; 3],
}

impl Tracker for SignChangeCounter {
    fn on_step(&mut self, old: &RotationalState, new: &RotationalState) -> Counters {
        for axis in Axis::ALL {
            if flipped(axis.component(old.omega), axis.component(new.omega)) {
                self.n[axis.index()] += 1;
            }
        }
        self.counters()
    }

    fn counters(&self) -> Counters {
        let [n_x, n_y, n_z] = self.n;
        Counters::SignChanges { n_x, n_y, n_z }
    }
}

/// Counts tumbles: sign changes of the angular acceleration about the
/// intermediate principal axis, read from `alpha_old` and `alpha` of the
/// newer state. Stays at zero when the body has no intermediate axis.
#[derive(Debug)]
pub struct IntermediateAxisFlipCounter {
    axis: Option<Axis>,
    n: u64,
}

impl IntermediateAxisFlipCounter {
    pub fn new(inertia: &InertiaTensor) -> Self {
        let axis = inertia.intermediate_axis();
        tracing::debug!(?axis, moments = ?inertia.moments(), "classified intermediate axis");
        Self { axis, n: 0 }
    }

    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }
}

impl Tracker for IntermediateAxisFlipCounter {
    fn on_step(&mut self, _old: &RotationalState, new: &RotationalState) -> Counters {
        if let Some(axis) = self.axis {
            if flipped(axis.component(new.alpha_old), axis.component(new.alpha)) {
                self.n += 1;
            }
        }
        self.counters()
    }

    fn counters(&self) -> Counters {
        Counters::Flips { axis: self.axis, n: self.n }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn with_omega(x: f64, y: f64, z: f64) -> RotationalState {
        RotationalState { omega: DVec3::new(x, y, z), ..Default::default() }
    }

    /// A state whose accelerations went from `old` to `new` over the last step.
    fn accelerated(old: [f64; 3], new: [f64; 3]) -> RotationalState {
        RotationalState {
            alpha_old: DVec3::from_array(old),
            alpha: DVec3::from_array(new),
            ..Default::default()
        }
    }

    #[test]
    fn sign_changes_are_counted_per_axis() {
        let mut counter = SignChangeCounter::default();
        counter.on_step(&with_omega(1.0, 1.0, 1.0), &with_omega(-1.0, 1.0, 2.0));
        let counters = counter.on_step(&with_omega(-1.0, 1.0, 2.0), &with_omega(1.0, -0.5, 2.0));
        assert_eq!(counters, Counters::SignChanges { n_x: 2, n_y: 1, n_z: 0 });
    }

    #[test]
    fn passing_through_zero_is_not_a_sign_change() {
        let mut counter = SignChangeCounter::default();
        counter.on_step(&with_omega(1.0, 0.0, -0.0), &with_omega(0.0, -1.0, 1.0));
        let counters = counter.on_step(&with_omega(0.0, -1.0, 1.0), &with_omega(-1.0, -2.0, 1.0));
        assert_eq!(counters, Counters::SignChanges { n_x: 0, n_y: 0, n_z: 0 });
    }

    #[test]
    fn flips_only_watch_the_intermediate_axis() {
        let inertia = InertiaTensor::new(3.0, 4.0, 2.0).unwrap();
        let mut counter = IntermediateAxisFlipCounter::new(&inertia);
        assert_eq!(counter.axis(), Some(Axis::X));

        let idle = RotationalState::default();
        counter.on_step(&idle, &accelerated([1.0, 1.0, 1.0], [1.0, -1.0, -1.0]));
        assert_eq!(counter.counters(), Counters::Flips { axis: Some(Axis::X), n: 0 });

        counter.on_step(&idle, &accelerated([1.0, -1.0, -1.0], [-0.1, -1.0, -1.0]));
        assert_eq!(counter.counters(), Counters::Flips { axis: Some(Axis::X), n: 1 });
    }

    #[test]
    fn flips_follow_the_integrated_acceleration_history() {
        use crate::core::solve::{ExplicitEuler, Integrator};

        // I_x = 3 is intermediate; W_z crosses zero near t = 2.49, turning a_x negative
        let inertia = InertiaTensor::new(3.0, 4.0, 2.0).unwrap();
        let mut counter = IntermediateAxisFlipCounter::new(&inertia);
        let mut solver = ExplicitEuler;
        let mut state = RotationalState::new(0.0, DVec3::ZERO, DVec3::new(1.0, 0.01, 0.01));
        solver.accelerate(&mut state, &inertia).unwrap();

        for _ in 0..5_000 {
            let old = state;
            solver.advance(&mut state, 0.001);
            solver.accelerate(&mut state, &inertia).unwrap();
            assert_eq!(state.alpha_old, old.alpha);
            counter.on_step(&old, &state);
        }

        let Counters::Flips { n, .. } = counter.counters() else {
            panic!("unexpected counters");
        };
        assert_eq!(n, 1, "a_x should change sign exactly once in the first 5 s");
    }

    #[test]
    fn degenerate_inertia_never_flips() {
        let inertia = InertiaTensor::new(2.0, 2.0, 2.0).unwrap();
        let mut counter = IntermediateAxisFlipCounter::new(&inertia);
        let idle = RotationalState::default();
        for _ in 0..10 {
            counter.on_step(&idle, &accelerated([1.0; 3], [-1.0; 3]));
            counter.on_step(&idle, &accelerated([-1.0; 3], [1.0; 3]));
        }
        assert_eq!(counter.counters(), Counters::Flips { axis: None, n: 0 });
    }

    #[test]
    fn mode_builds_matching_tracker() {
        let inertia = InertiaTensor::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(DiagnosticsMode::None.tracker(&inertia).counters(), Counters::None);
        assert_eq!(
            DiagnosticsMode::SignChange.tracker(&inertia).counters(),
            Counters::SignChanges { n_x: 0, n_y: 0, n_z: 0 }
        );
        assert_eq!(
            DiagnosticsMode::IntermediateAxisFlip.tracker(&inertia).counters(),
            Counters::Flips { axis: Some(Axis::Y), n: 0 }
        );
    }
}
