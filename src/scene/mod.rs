mod camera;
mod mapper;
mod types;

pub use camera::{camera_frames, CAMERA_FRAME_COUNT, CAMERA_RADIUS, CAMERA_Z_OFFSET};
pub use mapper::{build_scene, marker_sizes};
pub use types::{CameraFrame, EyePosition, PlotPoint, Scene};
