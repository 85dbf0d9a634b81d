use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

/// One flat row per observed body, derived from the raw feed. Immutable once
/// constructed; lives for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BodyRecord {
    pub name: String,
    pub date: NaiveDate,
    pub relative_velocity_km_s: f64,
    pub miss_distance_km: f64,
    /// Arithmetic mean of the feed's min/max estimated diameter, in meters.
    pub mean_diameter_m: f64,
    pub is_hazardous: bool,
}
