use crate::api::cell::ZoneCell;
use crate::api::grid::{GridAxis, GridFrame, GridLabel, GridLine, GridOutput};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

fn properties(pairs: Vec<(&str, serde_json::Value)>) -> JsonObject {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

fn feature(geometry: Geometry, props: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn line_feature(line: &GridLine) -> Feature {
    let geometry = Geometry::new(Value::LineString(vec![
        vec![line.start.lon, line.start.lat],
        vec![line.end.lon, line.end.lat],
    ]));
    let axis = match line.axis {
        GridAxis::Easting => "easting",
        GridAxis::Northing => "northing",
    };
    feature(
        geometry,
        properties(vec![
            ("kind", json!("grid-line")),
            ("axis", json!(axis)),
            ("zone", json!(format!("{:02}{}", line.zone_number, line.zone_letter))),
        ]),
    )
}

fn label_feature(label: &GridLabel, kind: &str) -> Feature {
    let geometry = Geometry::new(Value::Point(vec![
        label.position.lon,
        label.position.lat,
    ]));
    feature(
        geometry,
        properties(vec![("kind", json!(kind)), ("text", json!(label.text))]),
    )
}

fn cell_feature(cell: &ZoneCell) -> Feature {
    let geometry = Geometry::from(&cell.outline());
    feature(
        geometry,
        properties(vec![
            ("kind", json!("zone-outline")),
            ("zone", json!(cell.designator())),
        ]),
    )
}

/// Converts one generation cycle's lines and labels to a GeoJSON feature
/// collection. Lines carry `kind`, `axis`, and `zone` properties; labels
/// carry `kind` and `text`.
pub fn grid_to_geojson(output: &GridOutput) -> FeatureCollection {
    let mut features: Vec<Feature> = output.lines.iter().map(line_feature).collect();
    features.extend(
        output
            .labels
            .iter()
            .map(|label| label_feature(label, "square-label")),
    );
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Converts a full frame (zone outlines, zone labels, and the interval
/// grid) to a single GeoJSON feature collection a renderer can draw
/// directly.
pub fn frame_to_geojson(frame: &GridFrame) -> FeatureCollection {
    let mut features: Vec<Feature> = frame.cells.iter().map(cell_feature).collect();
    features.extend(
        frame
            .zone_labels
            .iter()
            .map(|label| label_feature(label, "zone-label")),
    );
    features.extend(grid_to_geojson(&frame.grid).features);
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
