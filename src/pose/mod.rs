#[allow(clippy::module_inception)]
pub mod pose;

pub use pose::{AngleUnit, Degrees, Pose, Radians};
