//! Batch conversion of flattened event rows into feature collections
//!
//! Reads the events CSV, validates its schema up front, and turns each row
//! into a point or line feature. A bad row never aborts the batch: it is
//! recorded in the report and skipped. Sequence numbers are assigned in a
//! deterministic post-pass from final collection position, so per-row parsing
//! has no shared mutable state.

pub mod coordinates;
pub mod feature;
pub mod report;
pub mod schema;

#[cfg(test)]
mod tests;

use self::coordinates::parse_coordinates;
use self::feature::{build_feature, extract_attributes};
use self::report::ConversionReport;
use self::schema::RowSchema;

use crate::constants::{GEOGRAPHY_COORDINATES_COLUMN, GEOGRAPHY_TYPE_COLUMN};
use crate::error::{DriveBcError, Result};
use crate::models::{
    EventAttributes, EventGeometry, FeatureCollections, GeometryKind, UnknownGeometryPolicy,
};
use csv::StringRecord;
use std::path::Path;
use tracing::{debug, warn};

/// Feature collections plus the batch accounting for one conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub collections: FeatureCollections,
    pub report: ConversionReport,
}

/// Converter for one batch of event rows
#[derive(Debug, Clone)]
pub struct EventConverter {
    policy: UnknownGeometryPolicy,
}

impl EventConverter {
    pub fn new(policy: UnknownGeometryPolicy) -> Self {
        Self { policy }
    }

    /// Convert a flattened events CSV file.
    pub fn convert_file(&self, path: &Path) -> Result<ConversionResult> {
        if !path.exists() {
            return Err(DriveBcError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        // The whole batch is materialized before conversion starts
        let records = reader
            .records()
            .collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()?;

        debug!("Read {} data rows from {}", records.len(), path.display());
        self.convert_records(&headers, &records, &path.display().to_string())
    }

    /// Convert an already-materialized batch of rows.
    ///
    /// `source` labels schema errors (usually the input filename). Schema
    /// validation is fail-fast: a missing required column aborts before any
    /// row is processed.
    pub fn convert_records(
        &self,
        headers: &StringRecord,
        records: &[StringRecord],
        source: &str,
    ) -> Result<ConversionResult> {
        let schema = RowSchema::analyze(headers, source)?;

        let mut staged_points: Vec<(EventGeometry, EventAttributes)> = Vec::new();
        let mut staged_lines: Vec<(EventGeometry, EventAttributes)> = Vec::new();
        let mut report = ConversionReport::default();

        for (row_index, record) in records.iter().enumerate() {
            report.total_rows += 1;

            let tag = schema.field(record, GEOGRAPHY_TYPE_COLUMN);
            let kind = match GeometryKind::from_tag(tag) {
                Some(kind) => kind,
                None => {
                    let error = DriveBcError::UnknownGeometryKind {
                        tag: tag.to_string(),
                    };
                    match self.policy {
                        UnknownGeometryPolicy::Strict => return Err(error),
                        UnknownGeometryPolicy::SkipAndReport => {
                            debug!("Row {}: {}", row_index, error);
                            report.record_skip(row_index, error.to_string());
                            continue;
                        }
                    }
                }
            };

            let raw = schema.field(record, GEOGRAPHY_COORDINATES_COLUMN);
            match parse_coordinates(raw, kind) {
                Ok(geometry) => {
                    let attributes = extract_attributes(record, &schema);
                    match geometry.kind() {
                        GeometryKind::Point => staged_points.push((geometry, attributes)),
                        GeometryKind::LineString => staged_lines.push((geometry, attributes)),
                    }
                }
                Err(error) => {
                    debug!("Row {}: {}", row_index, error);
                    report.record_skip(row_index, error.to_string());
                }
            }
        }

        // Sequence numbers come from final collection position: 1-based and
        // dense within each kind, independent of the original row index.
        let collections = FeatureCollections {
            points: number_features(staged_points),
            lines: number_features(staged_lines),
        };

        report.points_added = collections.points.len();
        report.lines_added = collections.lines.len();

        if !report.is_clean() {
            warn!(
                "Skipped {} of {} rows during conversion",
                report.rows_skipped(),
                report.total_rows
            );
        }

        Ok(ConversionResult {
            collections,
            report,
        })
    }
}

impl Default for EventConverter {
    fn default() -> Self {
        Self::new(UnknownGeometryPolicy::default())
    }
}

fn number_features(
    staged: Vec<(EventGeometry, EventAttributes)>,
) -> Vec<crate::models::FeatureRecord> {
    staged
        .into_iter()
        .enumerate()
        .map(|(position, (geometry, attributes))| {
            build_feature(position as u64 + 1, geometry, attributes)
        })
        .collect()
}
