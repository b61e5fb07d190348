//! Row schema for the flattened events CSV
//!
//! Maps header names to record indices and validates up front that every
//! required column is present, so a missing column aborts the batch before
//! any row is converted.

use crate::constants::{GEOGRAPHY_COORDINATES_COLUMN, GEOGRAPHY_TYPE_COLUMN};
use crate::error::{DriveBcError, Result};
use crate::models::EventAttributes;
use csv::StringRecord;
use std::collections::HashMap;

/// Column name to index mapping for one CSV header
#[derive(Debug, Clone)]
pub struct RowSchema {
    name_to_index: HashMap<String, usize>,
}

impl RowSchema {
    /// Columns every input row must carry: the 13 attribute columns plus the
    /// two geometry columns.
    pub fn required_columns() -> impl DoubleEndedIterator<Item = &'static str> {
        EventAttributes::COLUMNS
            .into_iter()
            .chain([GEOGRAPHY_TYPE_COLUMN, GEOGRAPHY_COORDINATES_COLUMN])
    }

    /// Analyze a header record. Fails with `SchemaMismatch` listing every
    /// missing required column; extra columns are ignored.
    pub fn analyze(headers: &StringRecord, source: &str) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            // First write wins on duplicate headers
            name_to_index
                .entry(header.trim().to_string())
                .or_insert(index);
        }

        let missing: Vec<&str> = Self::required_columns()
            .filter(|name| !name_to_index.contains_key(*name))
            .collect();

        if !missing.is_empty() {
            return Err(DriveBcError::SchemaMismatch {
                path: source.to_string(),
                missing: missing.join(", "),
            });
        }

        Ok(Self { name_to_index })
    }

    /// Fetch a cell by column name, trimmed. Columns are guaranteed present
    /// by `analyze`; a short record yields an empty cell.
    pub fn field<'a>(&self, record: &'a StringRecord, name: &str) -> &'a str {
        self.name_to_index
            .get(name)
            .and_then(|&index| record.get(index))
            .map(str::trim)
            .unwrap_or("")
    }

    pub fn column_count(&self) -> usize {
        self.name_to_index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_header() -> StringRecord {
        StringRecord::from(
            RowSchema::required_columns().collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_analyze_accepts_complete_header() {
        let schema = RowSchema::analyze(&full_header(), "events.csv").unwrap();
        assert_eq!(schema.column_count(), 15);
    }

    #[test]
    fn test_analyze_reports_all_missing_columns() {
        let headers = StringRecord::from(vec!["url", "id", "headline"]);
        let err = RowSchema::analyze(&headers, "events.csv").unwrap_err();
        match err {
            DriveBcError::SchemaMismatch { path, missing } => {
                assert_eq!(path, "events.csv");
                assert!(missing.contains("status"));
                assert!(missing.contains("geography_type"));
                assert!(missing.contains("geography_coordinates"));
                assert!(!missing.contains("url"));
            }
            other => panic!("Expected SchemaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_field_lookup_ignores_column_order() {
        let headers = StringRecord::from(
            RowSchema::required_columns().rev().collect::<Vec<_>>(),
        );
        let schema = RowSchema::analyze(&headers, "events.csv").unwrap();

        let mut cells: Vec<String> = (0..15).map(|i| format!("cell{}", i)).collect();
        // geography_coordinates is first in the reversed header
        cells[0] = "[1.0, 2.0]".to_string();
        let record = StringRecord::from(cells);

        assert_eq!(schema.field(&record, "geography_coordinates"), "[1.0, 2.0]");
        assert_eq!(schema.field(&record, "url"), "cell14");
    }

    #[test]
    fn test_field_trims_whitespace_and_tolerates_short_records() {
        let headers = full_header();
        let schema = RowSchema::analyze(&headers, "events.csv").unwrap();

        let record = StringRecord::from(vec!["  padded  "]);
        assert_eq!(schema.field(&record, "url"), "padded");
        assert_eq!(schema.field(&record, "areas"), "");
    }
}
