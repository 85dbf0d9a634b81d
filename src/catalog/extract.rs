use chrono::NaiveDate;

use crate::feed::{NeoEntry, NeoFeed};

use super::error::MalformedRecord;
use super::record::BodyRecord;

/// Flatten the date-keyed feed payload into one record per body.
///
/// Malformed entries are skipped with a warning so one bad upstream record
/// never blocks visualization of the rest. The result is stably sorted by
/// miss distance ascending; ties keep encounter order. An empty result is a
/// valid empty window, not an error.
pub fn extract(feed: &NeoFeed) -> Vec<BodyRecord> {
    let mut records = Vec::new();

    for (date_key, entries) in &feed.near_earth_objects {
        let date = match NaiveDate::parse_from_str(date_key, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                log::warn!(
                    "skipping {} entries: {}",
                    entries.len(),
                    MalformedRecord::InvalidDate(date_key.clone())
                );
                continue;
            }
        };

        for entry in entries {
            match extract_entry(date, entry) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("skipping record: {}", e),
            }
        }
    }

    records.sort_by(|a, b| a.miss_distance_km.total_cmp(&b.miss_distance_km));
    records
}

/// Flatten a single feed entry.
///
/// Uses the first listed close approach: the nearest-listed event, not
/// necessarily the chronologically nearest one.
pub fn extract_entry(date: NaiveDate, entry: &NeoEntry) -> Result<BodyRecord, MalformedRecord> {
    let diameter = entry
        .estimated_diameter
        .as_ref()
        .and_then(|d| d.meters.as_ref())
        .ok_or_else(|| MalformedRecord::MissingDiameter {
            name: entry.name.clone(),
        })?;

    let (min, max) = match (diameter.estimated_diameter_min, diameter.estimated_diameter_max) {
        (Some(min), Some(max)) => (min, max),
        _ => {
            return Err(MalformedRecord::MissingDiameter {
                name: entry.name.clone(),
            })
        }
    };

    let approach =
        entry
            .close_approach_data
            .first()
            .ok_or_else(|| MalformedRecord::NoCloseApproach {
                name: entry.name.clone(),
            })?;

    let velocity = approach
        .relative_velocity
        .as_ref()
        .and_then(|v| v.kilometers_per_second.as_deref())
        .ok_or_else(|| MalformedRecord::MissingField {
            name: entry.name.clone(),
            field: "relative_velocity.kilometers_per_second",
        })?;
    let relative_velocity_km_s = parse_non_negative(
        &entry.name,
        "relative_velocity.kilometers_per_second",
        velocity,
    )?;

    let distance = approach
        .miss_distance
        .as_ref()
        .and_then(|d| d.kilometers.as_deref())
        .ok_or_else(|| MalformedRecord::MissingField {
            name: entry.name.clone(),
            field: "miss_distance.kilometers",
        })?;
    let miss_distance_km = parse_non_negative(&entry.name, "miss_distance.kilometers", distance)?;

    Ok(BodyRecord {
        name: entry.name.clone(),
        date,
        relative_velocity_km_s,
        miss_distance_km,
        mean_diameter_m: (min + max) / 2.0,
        is_hazardous: entry.is_potentially_hazardous_asteroid,
    })
}

fn parse_non_negative(
    name: &str,
    field: &'static str,
    value: &str,
) -> Result<f64, MalformedRecord> {
    match value.parse::<f64>() {
        Ok(parsed) if parsed >= 0.0 && parsed.is_finite() => Ok(parsed),
        _ => Err(MalformedRecord::NonNumeric {
            name: name.to_string(),
            field,
            value: value.to_string(),
        }),
    }
}
