//! Feature building for converted rows
//!
//! Copies the fixed attribute columns out of a raw row and pairs them with a
//! parsed geometry. Both steps are pure: no I/O, and the input record is
//! never mutated.

use super::schema::RowSchema;
use crate::models::{EventAttributes, EventGeometry, FeatureRecord};
use csv::StringRecord;

/// Copy the 13 attribute columns out of a row, verbatim.
///
/// Key order is fixed by the `EventAttributes` declaration and identical for
/// every record, whatever the source column order was.
pub fn extract_attributes(record: &StringRecord, schema: &RowSchema) -> EventAttributes {
    EventAttributes {
        url: schema.field(record, "url").to_string(),
        id: schema.field(record, "id").to_string(),
        headline: schema.field(record, "headline").to_string(),
        status: schema.field(record, "status").to_string(),
        created: schema.field(record, "created").to_string(),
        updated: schema.field(record, "updated").to_string(),
        description: schema.field(record, "description").to_string(),
        event_type: schema.field(record, "event_type").to_string(),
        event_subtypes: schema.field(record, "event_subtypes").to_string(),
        severity: schema.field(record, "severity").to_string(),
        roads: schema.field(record, "roads").to_string(),
        areas: schema.field(record, "areas").to_string(),
        schedule_intervals: schema.field(record, "schedule_intervals").to_string(),
    }
}

/// Assemble one feature record. `sequence_number` is 1-based within the
/// feature's kind.
pub fn build_feature(
    sequence_number: u64,
    geometry: EventGeometry,
    attributes: EventAttributes,
) -> FeatureRecord {
    FeatureRecord {
        sequence_number,
        geometry,
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeometryKind;
    use geo_types::Point;

    fn schema_and_record(columns: &[&'static str], cells: &[&str]) -> (RowSchema, StringRecord) {
        let headers = StringRecord::from(columns.to_vec());
        let schema = RowSchema::analyze(&headers, "test.csv").unwrap();
        (schema, StringRecord::from(cells.to_vec()))
    }

    fn all_columns() -> Vec<&'static str> {
        RowSchema::required_columns().collect()
    }

    #[test]
    fn test_attributes_copied_verbatim() {
        let cells = vec![
            "https://api.example/events/1",
            "drivebc.ca/1",
            "Lane closed",
            "ACTIVE",
            "2021-12-01T08:00:00-08:00",
            "2021-12-02T09:30:00-08:00",
            "Single lane alternating traffic",
            "CONSTRUCTION",
            "ROAD_MAINTENANCE",
            "MAJOR",
            "[{\"name\":\"Highway 1\"}]",
            "[{\"name\":\"Lower Mainland\"}]",
            "2021-12-01T08:00/2021-12-24T17:00",
            "Point",
            "[-123.1,49.2]",
        ];
        let (schema, record) = schema_and_record(&all_columns(), &cells);

        let attributes = extract_attributes(&record, &schema);
        assert_eq!(attributes.url, "https://api.example/events/1");
        assert_eq!(attributes.event_type, "CONSTRUCTION");
        assert_eq!(attributes.schedule_intervals, "2021-12-01T08:00/2021-12-24T17:00");
        // The geometry columns are not part of the attribute mapping
        assert_eq!(attributes.values().len(), 13);
    }

    #[test]
    fn test_attribute_order_independent_of_source_column_order() {
        let straight = all_columns();
        let cells: Vec<&str> = (0..15)
            .map(|i| match i {
                13 => "Point",
                14 => "[-123.1,49.2]",
                _ => "x",
            })
            .collect();
        let (schema_a, record_a) = schema_and_record(&straight, &cells);

        let mut shuffled = all_columns();
        shuffled.reverse();
        let reversed_cells: Vec<&str> = cells.iter().rev().copied().collect();
        let (schema_b, record_b) = schema_and_record(&shuffled, &reversed_cells);

        let attributes_a = extract_attributes(&record_a, &schema_a);
        let attributes_b = extract_attributes(&record_b, &schema_b);
        assert_eq!(attributes_a, attributes_b);
        assert_eq!(attributes_a.values(), attributes_b.values());
    }

    #[test]
    fn test_build_feature_is_a_plain_constructor() {
        let cells: Vec<&str> = (0..15).map(|_| "v").collect();
        let (schema, record) = schema_and_record(&all_columns(), &cells);
        let attributes = extract_attributes(&record, &schema);

        let feature = build_feature(
            7,
            EventGeometry::Point(Point::new(-123.1, 49.2)),
            attributes.clone(),
        );
        assert_eq!(feature.sequence_number, 7);
        assert_eq!(feature.geometry.kind(), GeometryKind::Point);
        assert_eq!(feature.attributes, attributes);
    }
}
