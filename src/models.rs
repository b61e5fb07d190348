//! Core data structures for road-event feature conversion.
//!
//! Defines the geometry kinds accepted from the events feed, the fixed
//! attribute schema carried through to the map layers, and the feature
//! records accumulated by the batch converter.

use geo_types::{LineString, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geometry kinds accepted from the events feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
}

impl GeometryKind {
    /// Map a `geography_type` cell to a kind, if it is one we support
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Point" => Some(GeometryKind::Point),
            "LineString" => Some(GeometryKind::LineString),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed event geometry in WGS84 lon/lat order
#[derive(Debug, Clone, PartialEq)]
pub enum EventGeometry {
    Point(Point<f64>),
    Line(LineString<f64>),
}

impl EventGeometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            EventGeometry::Point(_) => GeometryKind::Point,
            EventGeometry::Line(_) => GeometryKind::LineString,
        }
    }
}

/// The attribute columns carried through from the feed to the map layers.
///
/// Field declaration order is the column order. Every record exposes the
/// same 13 keys in the same order, so downstream bulk inserts can rely on
/// positional mapping via [`EventAttributes::COLUMNS`] and
/// [`EventAttributes::values`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttributes {
    pub url: String,
    pub id: String,
    pub headline: String,
    pub status: String,
    pub created: String,
    pub updated: String,
    pub description: String,
    pub event_type: String,
    pub event_subtypes: String,
    pub severity: String,
    pub roads: String,
    pub areas: String,
    pub schedule_intervals: String,
}

impl EventAttributes {
    /// Column names, in the order they appear in every record
    pub const COLUMNS: [&'static str; 13] = [
        "url",
        "id",
        "headline",
        "status",
        "created",
        "updated",
        "description",
        "event_type",
        "event_subtypes",
        "severity",
        "roads",
        "areas",
        "schedule_intervals",
    ];

    /// Attribute values in [`Self::COLUMNS`] order
    pub fn values(&self) -> [&str; 13] {
        [
            &self.url,
            &self.id,
            &self.headline,
            &self.status,
            &self.created,
            &self.updated,
            &self.description,
            &self.event_type,
            &self.event_subtypes,
            &self.severity,
            &self.roads,
            &self.areas,
            &self.schedule_intervals,
        ]
    }
}

/// One mappable feature: a geometry plus its carried attributes.
///
/// `sequence_number` is 1-based and dense within the feature's kind,
/// independent of the original row index. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub sequence_number: u64,
    pub geometry: EventGeometry,
    pub attributes: EventAttributes,
}

/// Point and line features accumulated over one batch, input order preserved
/// within each kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollections {
    pub points: Vec<FeatureRecord>,
    pub lines: Vec<FeatureRecord>,
}

impl FeatureCollections {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.lines.is_empty()
    }

    pub fn feature_count(&self) -> usize {
        self.points.len() + self.lines.len()
    }
}

/// Policy for rows whose `geography_type` is neither Point nor LineString
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownGeometryPolicy {
    /// Skip the row, record it in the batch report (default)
    #[default]
    SkipAndReport,
    /// Abort the batch on the first unknown kind
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(GeometryKind::from_tag("Point"), Some(GeometryKind::Point));
        assert_eq!(
            GeometryKind::from_tag("LineString"),
            Some(GeometryKind::LineString)
        );
        assert_eq!(GeometryKind::from_tag("Polygon"), None);
        assert_eq!(GeometryKind::from_tag("point"), None); // case sensitive
        assert_eq!(GeometryKind::from_tag(""), None);
    }

    #[test]
    fn test_attribute_values_match_column_order() {
        let attributes = EventAttributes {
            url: "u".into(),
            id: "i".into(),
            headline: "h".into(),
            status: "ACTIVE".into(),
            created: "c".into(),
            updated: "up".into(),
            description: "d".into(),
            event_type: "INCIDENT".into(),
            event_subtypes: "HAZARD".into(),
            severity: "MAJOR".into(),
            roads: "r".into(),
            areas: "a".into(),
            schedule_intervals: "s".into(),
        };

        let values = attributes.values();
        assert_eq!(values.len(), EventAttributes::COLUMNS.len());
        assert_eq!(values[0], "u");
        assert_eq!(values[7], "INCIDENT");
        assert_eq!(values[12], "s");
    }

    #[test]
    fn test_geometry_kind_accessor() {
        let point = EventGeometry::Point(geo_types::Point::new(-123.1, 49.2));
        assert_eq!(point.kind(), GeometryKind::Point);

        let line = EventGeometry::Line(geo_types::LineString::from(vec![
            (-123.1, 49.2),
            (-123.2, 49.3),
        ]));
        assert_eq!(line.kind(), GeometryKind::LineString);
    }
}
