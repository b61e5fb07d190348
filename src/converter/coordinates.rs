//! Coordinate field parsing for event geometries
//!
//! The feed flattens each event's geometry into a textual JSON array column:
//! points arrive as `[lon, lat]` and lines as `[[lon1, lat1], [lon2, lat2], ...]`.
//! The column is parsed as a real nested array against the expected shape, so
//! malformed values surface as structured errors instead of stray tokens.

use crate::error::{DriveBcError, Result};
use crate::models::{EventGeometry, GeometryKind};
use geo_types::{Coord, LineString, Point};
use serde_json::Value;

/// Parse a `geography_coordinates` cell into a geometry of the given kind.
///
/// Coordinates are WGS84 and ordered `[longitude, latitude]`. Values outside
/// [-180, 180] / [-90, 90] are rejected.
pub fn parse_coordinates(raw: &str, kind: GeometryKind) -> Result<EventGeometry> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DriveBcError::coordinate_parse(
            kind,
            "empty coordinate field",
        ));
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|e| {
        DriveBcError::coordinate_parse(kind, format!("not a JSON array: {}", e))
    })?;

    match kind {
        GeometryKind::Point => {
            let coord = coordinate_from_value(&value, kind)?;
            Ok(EventGeometry::Point(Point::from(coord)))
        }
        GeometryKind::LineString => {
            let pairs = value.as_array().ok_or_else(|| {
                DriveBcError::coordinate_parse(
                    kind,
                    format!("expected an array of [lon, lat] pairs, got {}", type_name(&value)),
                )
            })?;

            if pairs.len() < 2 {
                return Err(DriveBcError::coordinate_parse(
                    kind,
                    format!("a line needs at least 2 points, got {}", pairs.len()),
                ));
            }

            let coords = pairs
                .iter()
                .map(|pair| coordinate_from_value(pair, kind))
                .collect::<Result<Vec<Coord<f64>>>>()?;

            Ok(EventGeometry::Line(LineString::from(coords)))
        }
    }
}

/// Interpret one JSON value as a `[lon, lat]` pair.
fn coordinate_from_value(value: &Value, kind: GeometryKind) -> Result<Coord<f64>> {
    let pair = value.as_array().ok_or_else(|| {
        DriveBcError::coordinate_parse(
            kind,
            format!("expected a [lon, lat] pair, got {}", type_name(value)),
        )
    })?;

    if pair.len() != 2 {
        return Err(DriveBcError::coordinate_parse(
            kind,
            format!("expected exactly 2 values per coordinate, got {}", pair.len()),
        ));
    }

    let lon = numeric(&pair[0], kind, "longitude")?;
    let lat = numeric(&pair[1], kind, "latitude")?;

    if !(-180.0..=180.0).contains(&lon) {
        return Err(DriveBcError::coordinate_parse(
            kind,
            format!("longitude {} out of range [-180, 180]", lon),
        ));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(DriveBcError::coordinate_parse(
            kind,
            format!("latitude {} out of range [-90, 90]", lat),
        ));
    }

    Ok(Coord { x: lon, y: lat })
}

fn numeric(value: &Value, kind: GeometryKind, role: &str) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        DriveBcError::coordinate_parse(kind, format!("{} is not a number: {}", role, value))
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_round_trips_exactly() {
        let geometry = parse_coordinates("[-123.45,49.28]", GeometryKind::Point).unwrap();
        match geometry {
            EventGeometry::Point(p) => {
                assert_eq!(p.x(), -123.45);
                assert_eq!(p.y(), 49.28);
            }
            other => panic!("Expected a point, got {:?}", other),
        }
    }

    #[test]
    fn test_point_tolerates_whitespace() {
        // pandas-style repr with spaces after commas
        let geometry =
            parse_coordinates("  [-123.4523201, 48.7529381]  ", GeometryKind::Point).unwrap();
        match geometry {
            EventGeometry::Point(p) => {
                assert_eq!(p.x(), -123.4523201);
                assert_eq!(p.y(), 48.7529381);
            }
            other => panic!("Expected a point, got {:?}", other),
        }
    }

    #[test]
    fn test_line_preserves_point_order() {
        let geometry = parse_coordinates(
            "[[-123.1,49.2],[-123.2,49.3],[-123.3,49.4]]",
            GeometryKind::LineString,
        )
        .unwrap();
        match geometry {
            EventGeometry::Line(line) => {
                let coords: Vec<(f64, f64)> = line.coords().map(|c| (c.x, c.y)).collect();
                assert_eq!(
                    coords,
                    vec![(-123.1, 49.2), (-123.2, 49.3), (-123.3, 49.4)]
                );
            }
            other => panic!("Expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_point_with_single_value_fails() {
        let err = parse_coordinates("[-123.1]", GeometryKind::Point).unwrap_err();
        match err {
            DriveBcError::CoordinateParse { kind, reason } => {
                assert_eq!(kind, GeometryKind::Point);
                assert!(reason.contains("exactly 2 values"));
            }
            other => panic!("Expected CoordinateParse, got {:?}", other),
        }
    }

    #[test]
    fn test_point_with_extra_values_fails() {
        assert!(parse_coordinates("[-123.1,49.2,11.0]", GeometryKind::Point).is_err());
    }

    #[test]
    fn test_non_numeric_value_fails() {
        let err = parse_coordinates("[-123.1,\"north\"]", GeometryKind::Point).unwrap_err();
        match err {
            DriveBcError::CoordinateParse { reason, .. } => {
                assert!(reason.contains("latitude"));
            }
            other => panic!("Expected CoordinateParse, got {:?}", other),
        }
    }

    #[test]
    fn test_single_point_line_fails() {
        let err = parse_coordinates("[[-123.1,49.2]]", GeometryKind::LineString).unwrap_err();
        match err {
            DriveBcError::CoordinateParse { kind, reason } => {
                assert_eq!(kind, GeometryKind::LineString);
                assert!(reason.contains("at least 2 points"));
            }
            other => panic!("Expected CoordinateParse, got {:?}", other),
        }
    }

    #[test]
    fn test_flat_array_for_line_fails() {
        // A point-shaped array where pairs are expected
        assert!(parse_coordinates("[-123.1,49.2]", GeometryKind::LineString).is_err());
    }

    #[test]
    fn test_empty_and_garbage_fail() {
        assert!(parse_coordinates("", GeometryKind::Point).is_err());
        assert!(parse_coordinates("   ", GeometryKind::LineString).is_err());
        assert!(parse_coordinates("not json", GeometryKind::Point).is_err());
        assert!(parse_coordinates("{\"lon\": -123.1}", GeometryKind::Point).is_err());
    }

    #[test]
    fn test_out_of_range_coordinates_fail() {
        assert!(parse_coordinates("[-191.0,49.2]", GeometryKind::Point).is_err());
        assert!(parse_coordinates("[-123.1,95.0]", GeometryKind::Point).is_err());
        // Boundary values are accepted
        assert!(parse_coordinates("[-180.0,90.0]", GeometryKind::Point).is_ok());
        assert!(parse_coordinates("[180.0,-90.0]", GeometryKind::Point).is_ok());
    }

    #[test]
    fn test_integer_coordinates_parse_as_floats() {
        let geometry = parse_coordinates("[-123,49]", GeometryKind::Point).unwrap();
        match geometry {
            EventGeometry::Point(p) => {
                assert_eq!(p.x(), -123.0);
                assert_eq!(p.y(), 49.0);
            }
            other => panic!("Expected a point, got {:?}", other),
        }
    }
}
