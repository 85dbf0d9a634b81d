use super::types::{CameraFrame, EyePosition};

pub const CAMERA_FRAME_COUNT: usize = 60;
pub const CAMERA_RADIUS: f64 = 2.0;
pub const CAMERA_Z_OFFSET: f64 = 0.3;

/// Precompute the closed camera rotation loop: 60 evenly spaced angles over
/// 0-360 degrees inclusive, each mapped to an eye position on a circle of
/// radius 2 at a constant z offset.
///
/// The angle actually advanced per frame is `raw_angle / rotation_speed`, so
/// a higher speed compresses the swept arc instead of spinning faster. This
/// inverse relationship is the observed product behavior and is kept as-is.
pub fn camera_frames(rotation_speed: f64) -> Vec<CameraFrame> {
    (0..CAMERA_FRAME_COUNT)
        .map(|angle_index| {
            let raw_angle = 360.0 * angle_index as f64 / (CAMERA_FRAME_COUNT as f64 - 1.0);
            let angle_rad = (raw_angle / rotation_speed).to_radians();
            CameraFrame {
                angle_index,
                eye: EyePosition {
                    x: CAMERA_RADIUS * angle_rad.cos(),
                    y: CAMERA_RADIUS * angle_rad.sin(),
                    z: CAMERA_Z_OFFSET,
                },
            }
        })
        .collect()
}
