//! Run configuration
//!
//! Defines the input contract of a simulation and how it is read from RON.

use std::fs;
use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::core::body::{Cuboid, InertiaTensor};
use crate::error::Result;
use crate::investigation::diagnostics::DiagnosticsMode;

/// How the principal moments of inertia are given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodySpec {
    /// Moments (I_x, I_y, I_z) given directly.
    Principal { x: f64, y: f64, z: f64 },
    /// A uniform box; moments derived from its dimensions and mass.
    Cuboid(Cuboid),
}

impl BodySpec {
    pub fn inertia(&self) -> Result<InertiaTensor> {
        match self {
            BodySpec::Principal { x, y, z } => InertiaTensor::new(*x, *y, *z),
            BodySpec::Cuboid(cuboid) => cuboid.inertia(),
        }
    }
}

/// Initial angular positions (radians, any range) and velocities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InitialConditions {
    #[serde(default)]
    pub angle: DVec3,
    pub omega: DVec3,
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub body: BodySpec,
    pub initial: InitialConditions,
    /// Start time [s]
    #[serde(default)]
    pub start: f64,
    /// Stop time [s], inclusive
    pub stop: f64,
    /// Internal time step [s]
    pub dt: f64,
    /// Emit every n-th internal step
    #[serde(default = "default_store_every")]
    pub store_every: u64,
    #[serde(default)]
    pub diagnostics: DiagnosticsMode,
}

fn default_store_every() -> u64 {
    1
}

impl RunConfig {
    /// A run from `t = 0` to `stop` with zero initial angles, every step
    /// stored and no diagnostics.
    pub fn new(body: BodySpec, omega: DVec3, stop: f64, dt: f64) -> Self {
        Self {
            body,
            initial: InitialConditions { angle: DVec3::ZERO, omega },
            start: 0.0,
            stop,
            dt,
            store_every: default_store_every(),
            diagnostics: DiagnosticsMode::None,
        }
    }

    pub fn with_angles(mut self, angle: DVec3) -> Self {
        self.initial.angle = angle;
        self
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    pub fn with_store_every(mut self, store_every: u64) -> Self {
        self.store_every = store_every;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsMode) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn from_ron(source: &str) -> Result<Self> {
        Ok(ron::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_ron(&source)
    }
}
