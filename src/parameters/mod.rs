#[allow(clippy::module_inception)]
pub mod parameters;

pub use parameters::{Error, ExifToolParams, PoseConfig, ScanParams, load, parse_string};
