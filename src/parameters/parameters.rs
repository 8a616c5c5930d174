use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::metadata::{SourceKind, scan::DEFAULT_SCAN_LIMIT};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error deserializing parameters")]
    Deserialize(#[from] toml::de::Error),

    #[error("Cannot read parameters from '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Parameters of the pose extraction pipeline.
///
/// Every section is optional; missing values take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoseConfig {
    pub source: SourceKind,
    pub scan: ScanParams,
    pub exiftool: ExifToolParams,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanParams {
    /// Bytes read from the start of the file
    pub limit: usize,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SCAN_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExifToolParams {
    pub program: PathBuf,
}

impl Default for ExifToolParams {
    fn default() -> Self {
        Self {
            program: PathBuf::from("exiftool"),
        }
    }
}

impl PoseConfig {
    fn validate(self) -> Result<Self, Error> {
        if self.scan.limit == 0 {
            return Err(Error::InvalidValue {
                key: "scan.limit".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.exiftool.program.as_os_str().is_empty() {
            return Err(Error::InvalidValue {
                key: "exiftool.program".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(self)
    }
}

pub fn parse_string(toml_str: &str) -> Result<PoseConfig, Error> {
    toml::from_str::<PoseConfig>(toml_str)?.validate()
}

pub fn load(path: &Path) -> Result<PoseConfig, Error> {
    info!("Reading parameters from '{}'", path.display());

    let toml_str = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.display().to_string(),
        source,
    })?;

    parse_string(&toml_str)
}
