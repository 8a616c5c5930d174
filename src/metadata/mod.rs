//! Sources of the raw rotation matrix payload.
//!
//! The camera stores the matrix in the EXIF `UserComment` field. It can be
//! found either by scanning the start of the file for the IFD entry
//! ([`ScanSource`]) or by asking `exiftool` for the field ([`ExifToolSource`]).
//! Both report a missing tag as `Ok(None)`.

pub mod exiftool;
pub mod scan;

use std::{fmt, path::Path, process::ExitStatus};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::parameters::PoseConfig;

pub use exiftool::ExifToolSource;
pub use scan::{ScanSource, TAG_SIGNATURE};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Rotation matrix payload truncated: need {needed} bytes at offset {offset}, only {available} read")]
    TruncatedPayload {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Cannot run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Cannot parse exiftool output")]
    Json(#[from] serde_json::Error),

    #[error("UserComment is not valid base64")]
    Base64(#[from] base64::DecodeError),

    #[error("UserComment payload must be {expected} bytes, got {actual}")]
    PayloadLength { expected: usize, actual: usize },
}

impl Error {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Produces the 36-byte matrix payload of a file, if it carries one
pub trait MatrixSource {
    fn read_matrix_data(&self, path: &Path) -> Result<Option<Vec<u8>>, Error>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Scan the start of the file for the UserComment IFD entry
    #[default]
    Scan,
    /// Read UserComment through the exiftool utility
    #[value(name = "exiftool")]
    ExifTool,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Scan => write!(f, "scan"),
            SourceKind::ExifTool => write!(f, "exiftool"),
        }
    }
}

pub fn source_from_config(config: &PoseConfig) -> Box<dyn MatrixSource> {
    match config.source {
        SourceKind::Scan => Box::new(ScanSource::new(config.scan.limit)),
        SourceKind::ExifTool => Box::new(ExifToolSource::new(config.exiftool.program.clone())),
    }
}
