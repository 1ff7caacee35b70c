pub mod euclidean;
pub mod manifold;
pub mod torus;

pub use euclidean::Euclidean3;
pub use manifold::Manifold;
pub use torus::{Torus3, normalize_angle};
