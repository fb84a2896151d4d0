use crate::api::grid::GridLabel;
use crate::api::viewport::ViewportBounds;
use crate::core::tables::{self, LatBand, ZoneColumn, LATITUDE_BANDS};
use crate::util::coord::GeoPoint;
use geo_types::{Coord, LineString};
use serde::{Deserialize, Serialize};

/// A visible grid-zone cell: a zone column crossed with a latitude band,
/// with any irregular-zone boundary overrides already applied.
///
/// Invariant: `top > bottom` and `right > left`; degenerate zones (32X,
/// 34X, 36X) are never materialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneCell {
    pub zone_number: u8,
    pub zone_letter: char,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ZoneCell {
    /// Combines a band and a column into a cell, applying overrides.
    /// Returns `None` for degenerate zones.
    pub(crate) fn build(column: &ZoneColumn, band: &LatBand) -> Option<Self> {
        let mut left = column.left;
        let mut right = column.right;

        if let Some(exception) = tables::override_for(column.number, band.letter) {
            if exception.degenerate {
                return None;
            }
            if let Some(l) = exception.left {
                left = l;
            }
            if let Some(r) = exception.right {
                right = r;
            }
        }
        if right <= left {
            return None;
        }

        Some(Self {
            zone_number: column.number,
            zone_letter: band.letter,
            top: band.top,
            bottom: band.bottom,
            left,
            right,
        })
    }

    /// The cell's designator string, zero-padded so "1W" reads "01W".
    pub fn designator(&self) -> String {
        format!("{:02}{}", self.zone_number, self.zone_letter)
    }

    /// The cell's center point.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            self.bottom + (self.top - self.bottom) / 2.0,
            self.left + (self.right - self.left) / 2.0,
        )
    }

    /// The boundary polyline a renderer draws for this cell: top-left,
    /// top-right, bottom-right. The remaining edges are drawn by the
    /// neighbouring cells, so they are omitted to avoid overlap.
    pub fn outline(&self) -> LineString<f64> {
        LineString::from(vec![
            Coord { x: self.left, y: self.top },
            Coord { x: self.right, y: self.top },
            Coord { x: self.right, y: self.bottom },
        ])
    }

    /// A centered designator label for this cell.
    pub fn label(&self) -> GridLabel {
        GridLabel {
            position: self.center(),
            text: self.designator(),
        }
    }

    /// True if the point lies within the cell rectangle.
    pub fn contains(&self, p: &GeoPoint) -> bool {
        p.lat <= self.top && p.lat >= self.bottom && p.lon <= self.right && p.lon >= self.left
    }
}

/// Finds the grid-zone cells intersecting a viewport.
///
/// Pure lookup against the static zone tables: enlarging the viewport can
/// only ever add cells, never remove one.
///
/// # Example
/// ```
/// use mgrs_grid_rs::{GzdLocator, ViewportBounds};
///
/// let locator = GzdLocator::default();
/// let cells = locator.locate(&ViewportBounds::new(41.1, 40.9, -76.9, -77.1, 10));
/// assert_eq!(cells.len(), 1);
/// assert_eq!(cells[0].designator(), "18T");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GzdLocator {
    min_zoom: u8,
}

impl Default for GzdLocator {
    fn default() -> Self {
        // Grid zones are meaningless at world scale
        Self { min_zoom: 4 }
    }
}

impl GzdLocator {
    pub fn new(min_zoom: u8) -> Self {
        Self { min_zoom }
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    /// Returns every non-degenerate cell whose rectangle intersects the
    /// viewport, or the empty set below the minimum zoom.
    pub fn locate(&self, viewport: &ViewportBounds) -> Vec<ZoneCell> {
        if viewport.zoom < self.min_zoom {
            return Vec::new();
        }

        let bands: Vec<&LatBand> = LATITUDE_BANDS
            .iter()
            .filter(|band| viewport.north >= band.bottom && viewport.south <= band.top)
            .collect();

        // Intersection is tested against the override-adjusted cell, not
        // the raw column: 32V and 37X extend into their neighbours' columns
        let mut cells = Vec::new();
        for number in 1..=60u8 {
            let column = match tables::column(number) {
                Ok(c) => c,
                Err(_) => continue,
            };
            for band in &bands {
                if let Some(cell) = ZoneCell::build(&column, band) {
                    if viewport.east >= cell.left && viewport.west <= cell.right {
                        cells.push(cell);
                    }
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::coord::GeoPoint;

    fn viewport_at(lat: f64, lon: f64, half: f64, zoom: u8) -> ViewportBounds {
        ViewportBounds::around(&GeoPoint::new(lat, lon), half, half, zoom)
    }

    #[test]
    fn test_single_cell_viewport() {
        let cells = GzdLocator::default().locate(&viewport_at(38.9, -77.0, 0.05, 12));
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].zone_number, 18);
        assert_eq!(cells[0].zone_letter, 'S');
        assert_eq!(cells[0].left, -78.0);
        assert_eq!(cells[0].right, -72.0);
    }

    #[test]
    fn test_four_cell_viewport() {
        // Straddles the 17/18 column seam and the S/T band seam
        let cells = GzdLocator::default().locate(&viewport_at(40.0018, -78.0006, 0.01, 12));
        assert_eq!(cells.len(), 4);

        let mut designators: Vec<String> = cells.iter().map(|c| c.designator()).collect();
        designators.sort();
        assert_eq!(designators, vec!["17S", "17T", "18S", "18T"]);
    }

    #[test]
    fn test_below_min_zoom_returns_nothing() {
        let cells = GzdLocator::default().locate(&viewport_at(38.9, -77.0, 0.05, 3));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_norway_cells_are_bent() {
        // Half-extent of 3° puts the west edge at 2.6°E, across the 3°E
        // bend, so both bent cells are in view
        let cells = GzdLocator::default().locate(&viewport_at(64.27, 5.60, 3.0, 6));

        let mut designators: Vec<String> = cells.iter().map(|c| c.designator()).collect();
        designators.sort();
        assert!(designators.contains(&"31V".to_string()), "{:?}", designators);
        assert!(designators.contains(&"32V".to_string()), "{:?}", designators);

        let v31 = cells.iter().find(|c| c.designator() == "31V").unwrap();
        assert_eq!(v31.right, 3.0);

        let v32 = cells.iter().find(|c| c.designator() == "32V").unwrap();
        assert_eq!(v32.left, 3.0);
    }

    #[test]
    fn test_bent_cells_found_in_extended_range() {
        // 3.2-4.0°E at 60°N is inside 32V's bent-out extent but west of
        // zone 32's nominal column
        let cells = GzdLocator::default().locate(&ViewportBounds::new(60.5, 60.0, 4.0, 3.2, 8));
        let designators: Vec<String> = cells.iter().map(|c| c.designator()).collect();
        assert!(designators.contains(&"32V".to_string()));
        assert!(!designators.contains(&"31V".to_string()));

        // 34°E at 80°N is inside 37X's extent but in zone 36's column
        let cells = GzdLocator::default().locate(&ViewportBounds::new(80.5, 80.0, 35.0, 34.0, 8));
        let designators: Vec<String> = cells.iter().map(|c| c.designator()).collect();
        assert!(designators.contains(&"37X".to_string()));
        assert!(!designators.contains(&"36X".to_string()));
    }

    #[test]
    fn test_degenerate_svalbard_cells_never_appear() {
        // A viewport covering the whole Svalbard region
        let cells = GzdLocator::default().locate(&ViewportBounds::new(84.0, 70.0, 45.0, -5.0, 6));

        for cell in &cells {
            assert_ne!(cell.designator(), "32X");
            assert_ne!(cell.designator(), "34X");
            assert_ne!(cell.designator(), "36X");
        }

        let x33 = cells.iter().find(|c| c.designator() == "33X").unwrap();
        assert_eq!(x33.left, 9.0);
        assert_eq!(x33.right, 21.0);

        let x31 = cells.iter().find(|c| c.designator() == "31X").unwrap();
        assert_eq!(x31.right, 9.0);

        let x37 = cells.iter().find(|c| c.designator() == "37X").unwrap();
        assert_eq!(x37.left, 33.0);
    }

    #[test]
    fn test_widening_viewport_is_monotone() {
        let locator = GzdLocator::default();
        let small = locator.locate(&viewport_at(40.0, -78.0, 0.5, 8));
        let large = locator.locate(&viewport_at(40.0, -78.0, 6.0, 8));

        for cell in &small {
            assert!(
                large.contains(cell),
                "cell {} dropped when widening",
                cell.designator()
            );
        }
        assert!(large.len() >= small.len());
    }

    #[test]
    fn test_cell_invariants() {
        let cells = GzdLocator::default().locate(&ViewportBounds::new(84.0, -80.0, 180.0, -180.0, 8));
        for cell in &cells {
            assert!(cell.top > cell.bottom, "{}", cell.designator());
            assert!(cell.right > cell.left, "{}", cell.designator());
        }
        // 60 columns x 20 bands, minus the three degenerate Svalbard cells
        assert_eq!(cells.len(), 60 * 20 - 3);
    }

    #[test]
    fn test_outline_and_label() {
        let cells = GzdLocator::default().locate(&viewport_at(38.9, -77.0, 0.05, 12));
        let cell = &cells[0];

        let outline = cell.outline();
        assert_eq!(outline.0.len(), 3);
        assert_eq!(outline.0[0], geo_types::Coord { x: -78.0, y: 40.0 });
        assert_eq!(outline.0[2], geo_types::Coord { x: -72.0, y: 32.0 });

        let label = cell.label();
        assert_eq!(label.text, "18S");
        assert!((label.position.lat - 36.0).abs() < 1e-9);
        assert!((label.position.lon - -75.0).abs() < 1e-9);
    }

    #[test]
    fn test_designator_zero_pads() {
        let cells = GzdLocator::default().locate(&viewport_at(50.0, -178.0, 0.5, 8));
        assert_eq!(cells[0].designator(), "01U");
    }
}
