//! GeoJSON layer output
//!
//! Writes the two feature collections as `points.geojson` and
//! `lines.geojson` for the downstream mapping tooling. Feature ids carry the
//! per-kind sequence numbers; properties carry the 13 attribute columns in
//! schema order.

use crate::constants::{LINES_GEOJSON_FILENAME, POINTS_GEOJSON_FILENAME};
use crate::error::Result;
use crate::models::{EventAttributes, EventGeometry, FeatureCollections, FeatureRecord};
use geojson::{Feature, FeatureCollection, GeoJson};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writer for GeoJSON layer files
#[derive(Debug, Clone)]
pub struct GeoJsonWriter {
    output_dir: PathBuf,
}

impl GeoJsonWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write both layers, returning their paths (points, lines).
    ///
    /// Empty collections still produce a file with zero features so the
    /// downstream layer list stays stable between runs.
    pub fn write_collections(&self, collections: &FeatureCollections) -> Result<(PathBuf, PathBuf)> {
        fs::create_dir_all(&self.output_dir)?;

        let points_path = self.output_dir.join(POINTS_GEOJSON_FILENAME);
        let lines_path = self.output_dir.join(LINES_GEOJSON_FILENAME);

        write_layer(&collections.points, &points_path)?;
        write_layer(&collections.lines, &lines_path)?;

        info!(
            "Wrote {} point and {} line features to {}",
            collections.points.len(),
            collections.lines.len(),
            self.output_dir.display()
        );
        Ok((points_path, lines_path))
    }
}

fn write_layer(records: &[FeatureRecord], path: &Path) -> Result<()> {
    let collection = FeatureCollection {
        bbox: None,
        features: records.iter().map(to_feature).collect(),
        foreign_members: None,
    };
    fs::write(path, GeoJson::from(collection).to_string())?;
    Ok(())
}

fn to_feature(record: &FeatureRecord) -> Feature {
    let geometry = match &record.geometry {
        EventGeometry::Point(point) => geojson::Geometry::from(point),
        EventGeometry::Line(line) => geojson::Geometry::from(line),
    };

    let mut properties = Map::new();
    for (name, value) in EventAttributes::COLUMNS
        .iter()
        .zip(record.attributes.values())
    {
        properties.insert((*name).to_string(), Value::String(value.to_string()));
    }

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: Some(geojson::feature::Id::Number(record.sequence_number.into())),
        properties: Some(properties),
        foreign_members: None,
    }
}
