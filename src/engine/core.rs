use glam::DVec3;
use tumble::core::body::Cuboid;
use tumble::{BodySpec, RunConfig};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub app_name: String,
    /// Log a progress line every n emitted records; 0 disables it.
    pub progress_every: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Tumble".to_string(),
            progress_every: 0,
        }
    }
}

/// The demonstration run: a 1.8 x 4 x 0.4 box of mass 10 spun mostly about
/// its intermediate axis for ten seconds.
pub fn demo_run() -> RunConfig {
    RunConfig::new(
        BodySpec::Cuboid(Cuboid::new(1.8, 4.0, 0.4, 10.0)),
        DVec3::new(4.0, 0.3, 0.1),
        10.0,
        0.0001,
    )
}
