// Torque-free rigid-body rotation, integrated with explicit Euler.
pub mod core {
    pub mod body;
    pub mod geometry;
    pub mod solve;
    pub mod state;
}

pub mod laws {
    pub mod classical;
}

pub mod investigation {
    pub mod diagnostics;
    pub mod observer;
    pub mod probe;
}

pub mod config;
pub mod error;
pub mod simulation;

pub use config::{BodySpec, InitialConditions, RunConfig};
pub use error::{Result, SimError};
pub use simulation::{RunResult, Simulation, StepRecord, Trajectory};
