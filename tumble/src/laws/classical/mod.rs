pub mod euler;

pub use euler::angular_acceleration;
