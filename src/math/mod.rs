pub mod euler;
pub mod rotation;

pub use euler::matrix_to_angles;
pub use rotation::{DecodeError, RotationMatrix};
