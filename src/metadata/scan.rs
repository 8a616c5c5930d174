use std::{fs::File, io::Read, path::Path};

use bytes::Buf;
use log::debug;

use super::{Error, MatrixSource};
use crate::math::rotation::MATRIX_PAYLOAD_LEN;

/// IFD entry of the UserComment tag (0x9286), type UNDEFINED, count 36
pub const TAG_SIGNATURE: [u8; 8] = [0x86, 0x92, 0x07, 0x00, 0x24, 0x00, 0x00, 0x00];

/// Bytes read from the start of the file when looking for the tag
pub const DEFAULT_SCAN_LIMIT: usize = 100_000;

/// IFD offsets are relative to the TIFF header, which follows the SOI marker,
/// the APP1 marker and length, and the "Exif\0\0" header.
const TIFF_HEADER_POS: usize = 12;

/// Finds the matrix payload by scanning raw file bytes.
#[derive(Debug, Clone)]
pub struct ScanSource {
    limit: usize,
}

impl ScanSource {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for ScanSource {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_LIMIT)
    }
}

impl MatrixSource for ScanSource {
    fn read_matrix_data(&self, path: &Path) -> Result<Option<Vec<u8>>, Error> {
        let mut buf = Vec::new();
        File::open(path)
            .and_then(|f| f.take(self.limit as u64).read_to_end(&mut buf))
            .map_err(|e| Error::io(path, e))?;

        debug!("Scanning {} bytes of '{}'", buf.len(), path.display());

        Ok(locate_payload(&buf)?.map(<[u8]>::to_vec))
    }
}

/// Locates the 36-byte matrix payload inside `buf`.
///
/// Returns `Ok(None)` if the tag signature does not occur in `buf`.
pub fn locate_payload(buf: &[u8]) -> Result<Option<&[u8]>, Error> {
    let Some(tag_pos) = find(buf, &TAG_SIGNATURE) else {
        debug!("Tag signature not found");
        return Ok(None);
    };

    let offset_pos = tag_pos + TAG_SIGNATURE.len();
    let mut offset_field = window(buf, offset_pos, 4)?;
    let offset = offset_field.get_u32_le() as usize;

    debug!("Tag found at byte {tag_pos}, payload offset {offset}");

    window(buf, offset.saturating_add(TIFF_HEADER_POS), MATRIX_PAYLOAD_LEN).map(Some)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn window(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], Error> {
    buf.get(offset..offset.saturating_add(len))
        .ok_or(Error::TruncatedPayload {
            offset,
            needed: len,
            available: buf.len(),
        })
}
