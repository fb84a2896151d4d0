use crate::api::cell::ZoneCell;
use crate::api::grid::GridLine;
use geo_types::{LineString, MultiLineString};
use wkt::ToWkt;

/// Renders a set of grid lines as a single WKT `MULTILINESTRING`.
pub fn lines_to_wkt(lines: &[GridLine]) -> String {
    let strings: Vec<LineString<f64>> = lines
        .iter()
        .map(|line| {
            LineString::from(vec![
                (line.start.lon, line.start.lat),
                (line.end.lon, line.end.lat),
            ])
        })
        .collect();
    MultiLineString::new(strings).wkt_string()
}

/// Renders a cell's boundary polyline as a WKT `LINESTRING`.
pub fn outline_to_wkt(cell: &ZoneCell) -> String {
    cell.outline().wkt_string()
}
