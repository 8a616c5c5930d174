#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use nalgebra::Rotation3;

/// Pose stored in the reference Mi Sphere image, in degrees
pub const YAW: f64 = -179.5305064389227;
pub const PITCH: f64 = 6.693635141483578;
pub const ROLL: f64 = 3.657116846804307;

/// Nine row-major f32 of Rz(yaw) * Ry(roll) * Rx(pitch), little-endian
pub fn matrix_payload(yaw: f64, pitch: f64, roll: f64) -> Vec<u8> {
    let rot = Rotation3::from_euler_angles(pitch.to_radians(), roll.to_radians(), yaw.to_radians());
    rot.matrix()
        .transpose()
        .iter()
        .flat_map(|v| (*v as f32).to_le_bytes())
        .collect()
}

fn u16_le(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn u32_le(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

/// JPEG with an APP1 Exif segment: IFD0 -> Exif IFD -> UserComment(payload).
///
/// `comment_offset` overrides the value offset of the UserComment entry.
pub fn exif_jpeg(payload: &[u8], comment_offset: Option<u32>) -> Vec<u8> {
    const IFD0: u32 = 8;
    const EXIF_IFD: u32 = IFD0 + 2 + 12 + 4;
    const COMMENT: u32 = EXIF_IFD + 2 + 12 + 4;

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    u16_le(&mut tiff, 42);
    u32_le(&mut tiff, IFD0);

    // IFD0: pointer to the Exif IFD
    u16_le(&mut tiff, 1);
    u16_le(&mut tiff, 0x8769);
    u16_le(&mut tiff, 4);
    u32_le(&mut tiff, 1);
    u32_le(&mut tiff, EXIF_IFD);
    u32_le(&mut tiff, 0);

    // Exif IFD: UserComment, UNDEFINED
    u16_le(&mut tiff, 1);
    u16_le(&mut tiff, 0x9286);
    u16_le(&mut tiff, 7);
    u32_le(&mut tiff, payload.len() as u32);
    u32_le(&mut tiff, comment_offset.unwrap_or(COMMENT));
    u32_le(&mut tiff, 0);

    tiff.extend_from_slice(payload);

    let mut jpeg = vec![0xff, 0xd8, 0xff, 0xe1];
    jpeg.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xff, 0xd9]);
    jpeg
}

/// JPEG carrying the reference pose
pub fn mi_sphere_jpeg() -> Vec<u8> {
    exif_jpeg(&matrix_payload(YAW, PITCH, ROLL), None)
}

/// JPEG whose Exif block has no matrix
pub fn plain_jpeg() -> Vec<u8> {
    exif_jpeg(b"ASCII\0\0\0Hello", None)
}

/// Writes `data` to a fresh file under the test tmp dir
pub fn fixture(name: &str, data: &[u8]) -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("fixtures");
    fs::create_dir_all(&dir).expect("Cannot create fixture dir");

    let path = dir.join(name);
    fs::write(&path, data).expect("Cannot write fixture");
    path
}
