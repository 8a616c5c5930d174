use crate::{
    math::rotation::RotationMatrix,
    pose::{Pose, Radians},
};

/// Below this value of cos(y) the decomposition is treated as gimbal locked
pub const GIMBAL_LOCK_THRESHOLD: f64 = 1e-6;

/// Tait-Bryan angles of a rotation composed as Rz * Ry * Rx.
///
/// ```text
/// ⎡cos(y)cos(z)  sin(x)sin(y)cos(z) - sin(z)cos(x)  sin(x)sin(z) + sin(y)cos(x)cos(z) ⎤
/// ⎢sin(z)cos(y)  sin(x)sin(y)sin(z) + cos(x)cos(z)  -sin(x)cos(z) + sin(y)sin(z)cos(x)⎥
/// ⎣  -sin(y)              sin(x)cos(y)                       cos(x)cos(y)            ⎦
/// ```
///
/// Returns yaw = z, pitch = x, roll = y. When locked, yaw is pinned to zero.
pub fn matrix_to_angles(m: &RotationMatrix) -> Pose<Radians> {
    let (r11, r21, r31) = (m.r(1, 1), m.r(2, 1), m.r(3, 1));
    let (r22, r23) = (m.r(2, 2), m.r(2, 3));
    let (r32, r33) = (m.r(3, 2), m.r(3, 3));

    let cy = (r11 * r11 + r21 * r21).sqrt();

    let (x, y, z) = if cy > GIMBAL_LOCK_THRESHOLD {
        (r32.atan2(r33), (-r31).atan2(cy), r21.atan2(r11))
    } else {
        ((-r23).atan2(r22), (-r31).atan2(cy), 0.0)
    };

    Pose::new(z, x, y)
}
