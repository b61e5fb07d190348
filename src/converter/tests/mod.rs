//! Integration tests for the converter module
//!
//! Tests the batch conversion pipeline on in-memory rows and on CSV files
//! written to temporary directories.


use crate::converter::schema::RowSchema;
use csv::StringRecord;

/// The full 15-column header in canonical order
pub fn header() -> StringRecord {
    StringRecord::from(RowSchema::required_columns().collect::<Vec<_>>())
}

/// Build one data row with deterministic attribute cells
pub fn event_row(id: &str, geography_type: &str, coordinates: &str) -> StringRecord {
    StringRecord::from(vec![
        format!("https://api.open511.gov.bc.ca/events/{}", id),
        format!("drivebc.ca/{}", id),
        format!("Event {}", id),
        "ACTIVE".to_string(),
        "2021-12-01T08:00:00-08:00".to_string(),
        "2021-12-02T09:30:00-08:00".to_string(),
        "Test event".to_string(),
        "INCIDENT".to_string(),
        "HAZARD".to_string(),
        "MAJOR".to_string(),
        "[]".to_string(),
        "[]".to_string(),
        String::new(),
        geography_type.to_string(),
        coordinates.to_string(),
    ])
}
