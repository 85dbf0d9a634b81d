use rand::Rng;

use crate::catalog::BodyRecord;

use super::camera::camera_frames;
use super::types::{
    PlotPoint, Scene, EARTH_COLOR, EARTH_LABEL, EARTH_MARKER_SIZE, HAZARD_COLOR, MARKER_SIZE_MAX,
    MARKER_SIZE_MIN, SAFE_COLOR,
};

/// Distance display scale: positions are plotted in millions of km.
const DISTANCE_SCALE_KM: f64 = 1e6;

/// Bounds on the per-axis random placement coefficients.
const XY_COEFF_BOUND: f64 = 1.0;
const Z_COEFF_BOUND: f64 = 0.3;

/// Map flat records to plottable points plus the camera loop.
///
/// The layout is a non-physical display aid: each body is placed at a
/// pseudo-random angular position scaled by its miss distance, so the chart
/// conveys relative distance without modeling orbital geometry. The random
/// source is injected so callers wanting reproducible layouts can seed it.
pub fn build_scene<R: Rng>(records: &[BodyRecord], rotation_speed: f64, rng: &mut R) -> Scene {
    let sizes = marker_sizes(records);
    let mut points = Vec::with_capacity(records.len() + 1);

    for (record, size) in records.iter().zip(sizes) {
        let scale = record.miss_distance_km / DISTANCE_SCALE_KM;
        points.push(PlotPoint {
            label: record.name.clone(),
            x: rng.gen_range(-XY_COEFF_BOUND..=XY_COEFF_BOUND) * scale,
            y: rng.gen_range(-XY_COEFF_BOUND..=XY_COEFF_BOUND) * scale,
            z: rng.gen_range(-Z_COEFF_BOUND..=Z_COEFF_BOUND) * scale,
            marker_size: size,
            marker_color: if record.is_hazardous {
                HAZARD_COLOR.to_string()
            } else {
                SAFE_COLOR.to_string()
            },
        });
    }

    // Central reference point, present even for an empty window.
    points.push(PlotPoint {
        label: EARTH_LABEL.to_string(),
        x: 0.0,
        y: 0.0,
        z: 0.0,
        marker_size: EARTH_MARKER_SIZE,
        marker_color: EARTH_COLOR.to_string(),
    });

    Scene {
        points,
        camera_frames: camera_frames(rotation_speed),
    }
}

/// Linear interpolation of mean diameters into the fixed marker-size range.
///
/// A degenerate batch (all diameters equal) maps every record to the range
/// midpoint instead of dividing by zero.
pub fn marker_sizes(records: &[BodyRecord]) -> Vec<f64> {
    let min = records
        .iter()
        .map(|r| r.mean_diameter_m)
        .fold(f64::INFINITY, f64::min);
    let max = records
        .iter()
        .map(|r| r.mean_diameter_m)
        .fold(f64::NEG_INFINITY, f64::max);

    let span = max - min;
    records
        .iter()
        .map(|record| {
            if span > 0.0 {
                MARKER_SIZE_MIN
                    + (record.mean_diameter_m - min) / span * (MARKER_SIZE_MAX - MARKER_SIZE_MIN)
            } else {
                (MARKER_SIZE_MIN + MARKER_SIZE_MAX) / 2.0
            }
        })
        .collect()
}
