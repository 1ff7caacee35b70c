//! Error types for the rotation engine.

use thiserror::Error;

use crate::core::body::Axis;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("moment of inertia about {axis} must be positive and finite, got {value}")]
    InvalidInertia { axis: Axis, value: f64 },

    #[error("box {name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("stop time {stop} is before start time {start}")]
    InvertedInterval { start: f64, stop: f64 },

    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("store_every must be at least 1")]
    ZeroStride,

    #[error("run of {steps:e} steps exceeds the step counter range")]
    HorizonTooLong { steps: f64 },

    #[error("division by zero: moment of inertia about {axis} is zero")]
    DivisionByZero { axis: Axis },

    #[error("config parse error: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Whether this error belongs to the configuration class, i.e. it is
    /// raised before any step is taken.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, SimError::DivisionByZero { .. })
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
