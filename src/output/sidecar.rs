use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, ensure};
use log::info;

use super::format::to_json_string;
use crate::pose::{Degrees, Pose};

pub const SIDECAR_SUFFIX: &str = ".pose.json";

/// `<target>.pose.json`, appended to the full file name
pub fn sidecar_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(SIDECAR_SUFFIX);
    PathBuf::from(name)
}

/// Writes the pose as a JSON object next to `target` and returns the sidecar path
pub fn write_sidecar(target: &Path, pose: &Pose<Degrees>) -> Result<PathBuf> {
    let path = sidecar_path(target);
    let serialized = to_json_string(pose)?;
    ensure!(serialized.is_ascii(), "Sidecar content is not ASCII");

    fs::write(&path, serialized)
        .with_context(|| format!("Cannot write sidecar file '{}'", path.display()))?;

    info!("Pose written to '{}'", path.display());
    Ok(path)
}
