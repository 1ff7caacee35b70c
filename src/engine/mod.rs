pub mod core;
pub mod summary;

use anyhow::Result;
use self::core::EngineConfig;
use summary::RunSummary;
use tumble::Simulation;
use tumble::investigation::observer::TracingObserver;

pub struct EngineApp {
    config: EngineConfig,
    simulation: Simulation,
}

impl EngineApp {
    pub fn new(config: EngineConfig, simulation: Simulation) -> Self {
        Self { config, simulation }
    }

    /// Streams the trajectory into a summary without keeping the records.
    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!(
            target: "engine",
            app = %self.config.app_name,
            records = self.simulation.expected_records(),
            "Engine starting"
        );

        let inertia = self.simulation.inertia();
        let mut summary = RunSummary::new(inertia);
        let trajectory = self.simulation.trajectory().with_observer(TracingObserver);

        for record in trajectory {
            let record = record?;
            summary.record(record);
            if self.config.progress_every > 0 && summary.records % self.config.progress_every == 0 {
                tracing::info!(target: "engine", t = record.t, records = summary.records, "progress");
            }
        }
        summary.close(inertia);

        tracing::info!(target: "engine", "Engine shutdown complete");
        Ok(summary)
    }
}
