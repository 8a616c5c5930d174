use std::path::Path;

use anyhow::Result;
use log::{debug, info};

use crate::{
    math::{RotationMatrix, matrix_to_angles},
    metadata::{MatrixSource, ScanSource, source_from_config},
    parameters::PoseConfig,
    pose::{Degrees, Pose, Radians},
};

/// Reads the camera pose of an image: matrix source, decoder, angle converter.
pub struct PoseExtractor {
    source: Box<dyn MatrixSource>,
}

impl PoseExtractor {
    pub fn new(source: Box<dyn MatrixSource>) -> Self {
        Self { source }
    }

    pub fn from_config(config: &PoseConfig) -> Self {
        info!("Reading rotation matrix with the '{}' source", config.source);
        Self::new(source_from_config(config))
    }

    /// Decoded rotation matrix, or `None` if the file does not carry one
    pub fn rotation_matrix(&self, path: &Path) -> Result<Option<RotationMatrix>> {
        let Some(data) = self.source.read_matrix_data(path)? else {
            return Ok(None);
        };

        let m = RotationMatrix::from_le_bytes(&data)?;
        debug!("Rotation matrix of '{}': {}", path.display(), m.matrix());

        Ok(Some(m))
    }

    pub fn angles_radians(&self, path: &Path) -> Result<Option<Pose<Radians>>> {
        Ok(self.rotation_matrix(path)?.as_ref().map(matrix_to_angles))
    }

    pub fn angles_degrees(&self, path: &Path) -> Result<Option<Pose<Degrees>>> {
        Ok(self.angles_radians(path)?.map(|p| p.to_degrees()))
    }
}

impl Default for PoseExtractor {
    fn default() -> Self {
        Self::new(Box::new(ScanSource::default()))
    }
}

/// Pose in radians, read by scanning the start of the file
pub fn get_angles_radians(path: &Path) -> Result<Option<Pose<Radians>>> {
    PoseExtractor::default().angles_radians(path)
}

/// Pose in degrees, read by scanning the start of the file
pub fn get_angles_degrees(path: &Path) -> Result<Option<Pose<Degrees>>> {
    PoseExtractor::default().angles_degrees(path)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Rotation3;

    use super::*;
    use crate::{
        math::DecodeError,
        metadata::{self, SourceKind},
    };

    struct FixedSource(Option<Vec<u8>>);

    impl MatrixSource for FixedSource {
        fn read_matrix_data(&self, _: &Path) -> Result<Option<Vec<u8>>, metadata::Error> {
            Ok(self.0.clone())
        }
    }

    fn extractor(data: Option<Vec<u8>>) -> PoseExtractor {
        PoseExtractor::new(Box::new(FixedSource(data)))
    }

    fn encode_pose(yaw: f64, pitch: f64, roll: f64) -> Vec<u8> {
        let rot = Rotation3::from_euler_angles(pitch, roll, yaw);
        rot.matrix()
            .transpose()
            .iter()
            .flat_map(|v| (*v as f32).to_le_bytes())
            .collect()
    }

    #[test]
    fn test_angles_from_source() {
        let (yaw, pitch, roll) = (-3.1334, 0.1168, 0.0638);
        let extractor = extractor(Some(encode_pose(yaw, pitch, roll)));

        let pose = extractor
            .angles_radians(Path::new("img.jpg"))
            .unwrap()
            .unwrap();

        assert_relative_eq!(pose.yaw(), yaw, epsilon = 1e-6);
        assert_relative_eq!(pose.pitch(), pitch, epsilon = 1e-6);
        assert_relative_eq!(pose.roll(), roll, epsilon = 1e-6);

        let deg = extractor
            .angles_degrees(Path::new("img.jpg"))
            .unwrap()
            .unwrap();

        assert_eq!(deg, pose.to_degrees());
    }

    #[test]
    fn test_absent() {
        let extractor = extractor(None);

        assert!(
            extractor
                .angles_degrees(Path::new("img.jpg"))
                .unwrap()
                .is_none()
        );
        assert!(
            extractor
                .rotation_matrix(Path::new("img.jpg"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_short_payload_is_decode_error() {
        let err = extractor(Some(vec![0; 12]))
            .angles_degrees(Path::new("img.jpg"))
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<DecodeError>(),
            Some(&DecodeError::BadLength {
                expected: 36,
                actual: 12
            })
        );
    }

    #[test]
    fn test_exiftool_failure_is_an_error() {
        let mut config = PoseConfig {
            source: SourceKind::ExifTool,
            ..Default::default()
        };
        config.exiftool.program = "/nonexistent/exiftool".into();

        let err = PoseExtractor::from_config(&config)
            .angles_degrees(Path::new("img.jpg"))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<metadata::Error>(),
            Some(metadata::Error::Spawn { .. })
        ));
    }
}
