//! Flattening of event records into the tabular CSV form
//!
//! Each event becomes one 15-column row: the 13 attribute columns, then
//! `geography_type` and `geography_coordinates`. List-valued fields are
//! joined (`event_subtypes`, `schedule.intervals`) or serialized as compact
//! JSON (`roads`, `areas`, coordinates) so the converter stage can recover
//! them without a lossy round-trip.

use super::api::Event;
use crate::constants::{GEOGRAPHY_COORDINATES_COLUMN, GEOGRAPHY_TYPE_COLUMN};
use crate::error::Result;
use crate::models::EventAttributes;
use std::path::Path;
use tracing::debug;

/// Header of the flattened CSV, in writing order
pub fn csv_header() -> Vec<&'static str> {
    EventAttributes::COLUMNS
        .into_iter()
        .chain([GEOGRAPHY_TYPE_COLUMN, GEOGRAPHY_COORDINATES_COLUMN])
        .collect()
}

/// Flatten one event into its 15 CSV cells
pub fn event_row(event: &Event) -> Result<[String; 15]> {
    Ok([
        event.url.clone(),
        event.id.clone(),
        event.headline.clone(),
        event.status.clone(),
        event.created.clone(),
        event.updated.clone(),
        event.description.clone(),
        event.event_type.clone(),
        event.event_subtypes.join(", "),
        event.severity.clone(),
        serde_json::to_string(&event.roads)?,
        serde_json::to_string(&event.areas)?,
        event.schedule.intervals.join(", "),
        event.geography.kind.clone(),
        serde_json::to_string(&event.geography.coordinates)?,
    ])
}

/// Write a batch of events to a CSV file, returning the record count.
pub fn write_events_csv(events: &[Event], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(csv_header())?;
    for event in events {
        writer.write_record(&event_row(event)?)?;
    }
    writer.flush()?;

    debug!("Wrote {} events to {}", events.len(), path.display());
    Ok(events.len())
}
