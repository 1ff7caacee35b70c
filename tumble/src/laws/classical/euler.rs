use glam::DVec3;

use crate::core::body::Axis;
use crate::error::{Result, SimError};

/// Euler's equations for a torque-free rigid body, solved for the angular
/// acceleration about each principal axis:
///
/// $\dot\omega_x = (I_y - I_z)\,\omega_y\omega_z / I_x$ and cyclic.
///
/// `moments` is taken raw so a zero moment surfaces as
/// [`SimError::DivisionByZero`] instead of an infinite or NaN acceleration.
pub fn angular_acceleration(omega: DVec3, moments: DVec3) -> Result<DVec3> {
    for axis in Axis::ALL {
        if axis.component(moments) == 0.0 {
            return Err(SimError::DivisionByZero { axis });
        }
    }

    let DVec3 { x: ix, y: iy, z: iz } = moments;
    let DVec3 { x: wx, y: wy, z: wz } = omega;
    Ok(DVec3::new(
        (iy - iz) * wy * wz / ix,
        (iz - ix) * wz * wx / iy,
        (ix - iy) * wx * wy / iz,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_hand_computed_values() {
        let alpha = angular_acceleration(DVec3::new(1.0, 2.0, 3.0), DVec3::new(3.0, 4.0, 2.0)).unwrap();
        assert_eq!(alpha, DVec3::new((4.0 - 2.0) * 6.0 / 3.0, (2.0 - 3.0) * 3.0 / 4.0, (3.0 - 4.0) * 2.0 / 2.0));
    }

    #[test]
    fn single_axis_spin_has_no_acceleration() {
        let alpha = angular_acceleration(DVec3::new(0.0, 5.0, 0.0), DVec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(alpha, DVec3::ZERO);
    }

    #[test]
    fn zero_moment_is_an_explicit_failure() {
        let err = angular_acceleration(DVec3::ONE, DVec3::new(1.0, 0.0, 3.0)).unwrap_err();
        assert!(matches!(err, SimError::DivisionByZero { axis: Axis::Y }));
    }
}
