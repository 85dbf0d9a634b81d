use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw feed payload: a date-keyed mapping of body entries, as delivered by
/// the upstream NeoWs endpoint.
///
/// Fields the upstream contract may omit are `Option`s here; validation
/// happens in the extractor so one malformed entry never poisons the whole
/// payload.
#[derive(Debug, Clone, Deserialize)]
pub struct NeoFeed {
    pub near_earth_objects: BTreeMap<String, Vec<NeoEntry>>,
}

impl NeoFeed {
    /// Total number of body entries across all dates.
    pub fn entry_count(&self) -> usize {
        self.near_earth_objects.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NeoEntry {
    pub name: String,
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
    pub is_potentially_hazardous_asteroid: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: Option<DiameterRange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: Option<f64>,
    pub estimated_diameter_max: Option<f64>,
}

/// One recorded close approach. The feed delivers velocity and distance as
/// decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    pub relative_velocity: Option<RelativeVelocity>,
    pub miss_distance: Option<MissDistance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_second: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissDistance {
    pub kilometers: Option<String>,
}
