use crate::config::RunConfig;
use crate::core::body::InertiaTensor;
use crate::investigation::diagnostics::Counters;

/// Callbacks around a run. Kept out of the integration loop: a trajectory
/// without an observer produces the same records.
pub trait RunObserver: Send {
    /// Called once, right before the first step is taken.
    fn on_start(&mut self, _config: &RunConfig, _inertia: &InertiaTensor) {}

    /// Called once after the last internal step.
    fn on_finish(&mut self, _steps: u64, _emitted: u64, _counters: Counters) {}
}

/// Writes the run banner and closing line through `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn on_start(&mut self, config: &RunConfig, inertia: &InertiaTensor) {
        let i = inertia.moments();
        let w = config.initial.omega;
        tracing::info!(
            target: "tumble",
            "Moments of inertia: ({:.3}, {:.3}, {:.3})",
            i.x,
            i.y,
            i.z
        );
        tracing::info!(
            target: "tumble",
            "Initial angular velocities: ({:.3}, {:.3}, {:.3})",
            w.x,
            w.y,
            w.z
        );
        tracing::debug!(
            target: "tumble",
            start = config.start,
            stop = config.stop,
            dt = config.dt,
            store_every = config.store_every,
            diagnostics = ?config.diagnostics,
            "run configured"
        );
    }

    fn on_finish(&mut self, steps: u64, emitted: u64, counters: Counters) {
        tracing::info!(target: "tumble", steps, emitted, ?counters, "run complete");
    }
}
