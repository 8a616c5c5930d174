//! Camera pose of Mi Sphere panoramas.
//!
//! The camera firmware stores its orientation as a 3x3 rotation matrix in the
//! EXIF `UserComment` field. This crate locates the matrix, decodes it and
//! converts it to yaw/pitch/roll angles.

pub mod extractor;
pub mod math;
pub mod metadata;
pub mod output;
pub mod parameters;
pub mod plugin;
pub mod pose;

pub use extractor::{PoseExtractor, get_angles_degrees, get_angles_radians};
pub use plugin::{PluginMetadata, panoedit_metadata_plugin};
pub use pose::{Degrees, Pose, Radians};
