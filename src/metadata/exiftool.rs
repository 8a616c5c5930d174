use std::{
    path::{Path, PathBuf},
    process::Command,
};

use base64::{Engine, engine::general_purpose::STANDARD};
use log::{debug, warn};
use serde::Deserialize;

use super::{Error, MatrixSource};
use crate::math::rotation::MATRIX_PAYLOAD_LEN;

const BASE64_PREFIX: &str = "base64:";

#[derive(Debug, Deserialize)]
struct ExifToolRecord {
    #[serde(rename = "UserComment")]
    user_comment: Option<serde_json::Value>,
}

/// Reads the matrix payload from the `UserComment` field reported by exiftool.
#[derive(Debug, Clone)]
pub struct ExifToolSource {
    program: PathBuf,
}

impl ExifToolSource {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for ExifToolSource {
    fn default() -> Self {
        Self::new("exiftool")
    }
}

impl MatrixSource for ExifToolSource {
    fn read_matrix_data(&self, path: &Path) -> Result<Option<Vec<u8>>, Error> {
        let program = self.program.display().to_string();
        debug!("Running '{program}' on '{}'", path.display());

        let output = Command::new(&self.program)
            .args(["-b", "-j", "-UserComment"])
            .arg(path)
            .output()
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::ToolFailed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        decode_user_comment(&output.stdout)
    }
}

/// Extracts the matrix payload from exiftool's JSON output.
///
/// A missing record, a missing field or a value without the `base64:` prefix
/// mean the file has no matrix and yield `Ok(None)`.
pub fn decode_user_comment(json: &[u8]) -> Result<Option<Vec<u8>>, Error> {
    let records: Vec<ExifToolRecord> = serde_json::from_slice(json)?;

    let Some(comment) = records.into_iter().next().and_then(|r| r.user_comment) else {
        debug!("No UserComment in exiftool output");
        return Ok(None);
    };

    let Some(encoded) = comment.as_str().and_then(|s| s.strip_prefix(BASE64_PREFIX)) else {
        warn!("UserComment does not hold binary data");
        return Ok(None);
    };

    let data = STANDARD.decode(encoded.trim())?;
    if data.len() != MATRIX_PAYLOAD_LEN {
        return Err(Error::PayloadLength {
            expected: MATRIX_PAYLOAD_LEN,
            actual: data.len(),
        });
    }

    Ok(Some(data))
}
