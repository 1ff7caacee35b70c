use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// One of the three body-fixed principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Picks this axis' component out of a vector.
    pub fn component(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Principal moments of inertia (I_x, I_y, I_z).
///
/// Every moment is strictly positive and finite; the constructor is the only
/// way in, so a tensor in hand can always be divided by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InertiaTensor {
    moments: DVec3,
}

impl InertiaTensor {
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        let moments = DVec3::new(x, y, z);
        for axis in Axis::ALL {
            let value = axis.component(moments);
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidInertia { axis, value });
            }
        }
        Ok(Self { moments })
    }

    pub fn moments(&self) -> DVec3 {
        self.moments
    }

    pub fn about(&self, axis: Axis) -> f64 {
        axis.component(self.moments)
    }

    /// The axis whose moment lies strictly between the other two, or `None`
    /// when no strict ordering exists (any two moments equal).
    ///
    /// Rotation about this axis is the unstable one (tennis-racket effect).
    pub fn intermediate_axis(&self) -> Option<Axis> {
        let DVec3 { x, y, z } = self.moments;
        let between = |m: f64, a: f64, b: f64| (a < m && m < b) || (b < m && m < a);
        if between(x, y, z) {
            Some(Axis::X)
        } else if between(y, z, x) {
            Some(Axis::Y)
        } else if between(z, x, y) {
            Some(Axis::Z)
        } else {
            None
        }
    }
}

/// A solid rectangular box of uniform density.
///
/// `length` runs along x, `height` along y and `width` along z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    pub length: f64,
    pub height: f64,
    pub width: f64,
    pub mass: f64,
}

impl Cuboid {
    pub fn new(length: f64, height: f64, width: f64, mass: f64) -> Self {
        Self { length, height, width, mass }
    }

    /// Closed-form principal moments about the box's centre:
    /// I_x = m(w² + h²)/12, I_y = m(l² + w²)/12, I_z = m(l² + h²)/12.
    pub fn inertia(&self) -> Result<InertiaTensor> {
        let fields = [
            ("length", self.length),
            ("height", self.height),
            ("width", self.width),
            ("mass", self.mass),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidDimension { name, value });
            }
        }

        let Cuboid { length: l, height: h, width: w, mass: m } = *self;
        InertiaTensor::new(
            m * (w * w + h * h) / 12.0,
            m * (l * l + w * w) / 12.0,
            m * (l * l + h * h) / 12.0,
        )
    }
}
