use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::{
    extractor::get_angles_degrees,
    pose::{Degrees, Pose},
};

/// Metadata handed to the panorama editor: `{"pose": {"yaw", "pitch", "roll"}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginMetadata {
    pub pose: Pose<Degrees>,
}

/// Metadata plugin entry point of the panorama editor.
///
/// Returns `None` when the image carries no rotation matrix.
pub fn panoedit_metadata_plugin(path: &Path) -> Result<Option<PluginMetadata>> {
    Ok(get_angles_degrees(path)?.map(|pose| PluginMetadata { pose }))
}
