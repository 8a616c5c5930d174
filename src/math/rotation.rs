use bytes::Buf;
use nalgebra::Matrix3;
use thiserror::Error;

/// Number of bytes in an encoded matrix: 9 little-endian f32
pub const MATRIX_PAYLOAD_LEN: usize = 9 * 4;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Rotation matrix payload must be {expected} bytes, got {actual}")]
    BadLength { expected: usize, actual: usize },
}

/// 3x3 rotation matrix as stored by the camera firmware.
///
/// No orthonormality check is made: any 36 bytes decode to a matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix(Matrix3<f64>);

impl RotationMatrix {
    pub fn new(m: Matrix3<f64>) -> Self {
        Self(m)
    }

    /// Builds the matrix from row-major values `[r11, r12, r13, r21, ... r33]`
    pub fn from_row_slice(values: &[f64; 9]) -> Self {
        Self(Matrix3::from_row_slice(values))
    }

    /// Decodes nine row-major little-endian f32 values.
    pub fn from_le_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() != MATRIX_PAYLOAD_LEN {
            return Err(DecodeError::BadLength {
                expected: MATRIX_PAYLOAD_LEN,
                actual: data.len(),
            });
        }

        let mut buf = data;
        let mut values = [0.0f64; 9];
        for v in values.iter_mut() {
            *v = buf.get_f32_le() as f64;
        }

        Ok(Self::from_row_slice(&values))
    }

    /// Element at 1-based row `i` and column `j`, matching the r_ij notation
    pub fn r(&self, i: usize, j: usize) -> f64 {
        self.0[(i - 1, j - 1)]
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }
}

impl From<Matrix3<f64>> for RotationMatrix {
    fn from(m: Matrix3<f64>) -> Self {
        Self(m)
    }
}
