use serde::Serialize;
use utoipa::ToSchema;

pub const HAZARD_COLOR: &str = "#FF4B4B";
pub const SAFE_COLOR: &str = "#4B9EFF";
pub const EARTH_COLOR: &str = "green";
pub const EARTH_LABEL: &str = "Earth";
pub const EARTH_MARKER_SIZE: f64 = 25.0;

pub const MARKER_SIZE_MIN: f64 = 4.0;
pub const MARKER_SIZE_MAX: f64 = 20.0;

/// One plottable marker. Position is in display units (millions of km),
/// placed by a randomized non-physical layout.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlotPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub marker_size: f64,
    pub marker_color: String,
}

/// Camera eye position in scene units, matching the chart's camera format.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct EyePosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One step of the precomputed orbital camera loop, independent of the data.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CameraFrame {
    pub angle_index: usize,
    pub eye: EyePosition,
}

/// Render-ready chart description: every body marker plus the central
/// reference point, and the closed camera rotation loop.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Scene {
    pub points: Vec<PlotPoint>,
    pub camera_frames: Vec<CameraFrame>,
}
