use crate::api::cell::{GzdLocator, ZoneCell};
use crate::api::viewport::ViewportBounds;
use crate::core::constants::{BOUNDARY_TOLERANCE, LAT_EDGE_EPSILON, LON_EDGE_EPSILON};
use crate::core::transform::{forward, inverse};
use crate::util::coord::{GeoPoint, UtmCoordinate};
use crate::util::error::GridError;
use crate::util::mgrs::square_id;
use geo::{Distance, Haversine};
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Which projected coordinate a grid line holds constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridAxis {
    /// Constant easting: the line runs roughly north-south.
    Easting,
    /// Constant northing: the line runs roughly east-west.
    Northing,
}

/// A renderable two-point segment, tagged with the cell that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub axis: GridAxis,
    pub zone_number: u8,
    pub zone_letter: char,
}

/// A text label positioned in geographic space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLabel {
    pub position: GeoPoint,
    pub text: String,
}

/// Whether the viewport fit inside one zone column or straddled a seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridMode {
    Single,
    Split,
}

/// One regeneration cycle's worth of grid lines and labels. Each cycle's
/// output fully replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridOutput {
    pub mode: GridMode,
    pub lines: Vec<GridLine>,
    pub labels: Vec<GridLabel>,
}

impl GridOutput {
    fn empty(mode: GridMode) -> Self {
        Self {
            mode,
            lines: Vec::new(),
            labels: Vec::new(),
        }
    }
}

/// Grid line spacing: the 100,000m square boundaries or the 1,000m grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridInterval {
    Square100Km,
    Meter1000,
}

impl GridInterval {
    /// Line spacing in meters.
    pub fn meters(&self) -> f64 {
        match self {
            GridInterval::Square100Km => 100000.0,
            GridInterval::Meter1000 => 1000.0,
        }
    }

    /// The zoom level below which this interval is not generated at all.
    pub fn min_zoom(&self) -> u8 {
        match self {
            GridInterval::Square100Km => 4,
            GridInterval::Meter1000 => 12,
        }
    }

    /// Viewport padding ratio per zoom level, masking pan latency. Higher
    /// zooms need proportionally more padding so the grid fills the screen
    /// during a pan.
    pub fn padding_ratio(&self, zoom: u8) -> f64 {
        match self {
            GridInterval::Square100Km => {
                if zoom >= 17 {
                    3.0
                } else if zoom >= 15 {
                    1.0
                } else if zoom >= 12 {
                    0.15
                } else {
                    0.1
                }
            }
            GridInterval::Meter1000 => match zoom {
                18.. => 4.0,
                17 => 1.5,
                16 => 0.75,
                15 => 0.25,
                14 => 0.15,
                13 => 0.1,
                _ => 0.03,
            },
        }
    }
}

/// 100k-square labels only appear once zoomed in past world scale.
const LABEL_MIN_ZOOM: u8 = 7;

/// Generates clipped, boundary-connected grid-line segments for the cells
/// visible in a viewport.
///
/// The pipeline is pure: every call recomputes from the viewport and the
/// static zone tables, so arbitrary viewport jumps are safe.
///
/// # Example
/// ```
/// use mgrs_grid_rs::{GridGenerator, GridInterval, GzdLocator, ViewportBounds};
///
/// # fn main() -> Result<(), mgrs_grid_rs::GridError> {
/// let viewport = ViewportBounds::new(38.91, 38.89, -77.02, -77.04, 15);
/// let cells = GzdLocator::default().locate(&viewport);
/// let output = GridGenerator::new(GridInterval::Meter1000).generate(&viewport, &cells)?;
/// assert!(!output.lines.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridGenerator {
    interval: GridInterval,
}

impl GridGenerator {
    pub fn new(interval: GridInterval) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> GridInterval {
        self.interval
    }

    /// Runs the generation pipeline over the given cells.
    ///
    /// Each cell is an independent sub-problem confined to its own zone,
    /// so a viewport straddling a zone seam never projects coordinates
    /// across the discontinuity.
    pub fn generate(
        &self,
        viewport: &ViewportBounds,
        cells: &[ZoneCell],
    ) -> Result<GridOutput, GridError> {
        let mut columns: Vec<u8> = cells.iter().map(|c| c.zone_number).collect();
        columns.sort_unstable();
        columns.dedup();
        let mode = if columns.len() > 1 {
            GridMode::Split
        } else {
            GridMode::Single
        };

        let mut output = GridOutput::empty(mode);
        if viewport.zoom < self.interval.min_zoom() || cells.is_empty() {
            return Ok(output);
        }

        let padded = viewport.padded(self.interval.padding_ratio(viewport.zoom));
        for cell in cells {
            self.generate_for_cell(&padded, cell, &mut output)?;
        }
        Ok(output)
    }

    fn generate_for_cell(
        &self,
        padded: &ViewportBounds,
        cell: &ZoneCell,
        output: &mut GridOutput,
    ) -> Result<(), GridError> {
        // SCAN: intersect the padded viewport with the cell, backing off
        // the shared top/right edges which belong to the neighbours
        let west = padded.west.max(cell.left);
        let east = padded.east.min(cell.right - LON_EDGE_EPSILON);
        let south = padded.south.max(cell.bottom);
        let north = padded.north.min(cell.top - LAT_EDGE_EPSILON);
        if west >= east || south >= north {
            return Ok(());
        }

        let corners = [
            forward(&GeoPoint::new(south, west))?,
            forward(&GeoPoint::new(south, east))?,
            forward(&GeoPoint::new(north, west))?,
            forward(&GeoPoint::new(north, east))?,
        ];
        let mut e_lo = f64::INFINITY;
        let mut e_hi = f64::NEG_INFINITY;
        let mut n_lo = f64::INFINITY;
        let mut n_hi = f64::NEG_INFINITY;
        for c in &corners {
            e_lo = e_lo.min(c.easting);
            e_hi = e_hi.max(c.easting);
            n_lo = n_lo.min(c.northing);
            n_hi = n_hi.max(c.northing);
        }

        let interval = self.interval.meters();
        // Span bounds are aligned outward so candidate lines always cross
        // the region; line positions are aligned inward
        let e_span = (align_down(e_lo, interval), align_up(e_hi, interval));
        let n_span = (align_down(n_lo, interval), align_up(n_hi, interval));

        // BUILD northing-axis lines (constant northing, west to east)
        for n in aligned_steps(align_up(n_lo, interval), align_down(n_hi, interval), interval) {
            let w_end = self.to_geo(e_span.0, n, cell)?;
            let e_end = self.to_geo(e_span.1, n, cell)?;

            // CLIP to the cell's longitude bounds
            let Some((start, end)) = clip_to_lon_bounds(w_end, e_end, cell.left, cell.right)
            else {
                continue;
            };
            output.lines.push(GridLine {
                start,
                end,
                axis: GridAxis::Northing,
                zone_number: cell.zone_number,
                zone_letter: cell.zone_letter,
            });

            // CONNECT: bridge the remaining gap to the zone boundary where
            // the cell width is not a whole number of intervals
            if end.lon < cell.right - BOUNDARY_TOLERANCE {
                if let Some(connector) = self.eastward_connector(&end, cell)? {
                    output.lines.push(connector);
                }
            }
            if start.lon > cell.left + BOUNDARY_TOLERANCE {
                if let Some(connector) = self.westward_connector(&start, cell)? {
                    output.lines.push(connector);
                }
            }
        }

        // BUILD easting-axis lines (constant easting, south to north)
        for e in aligned_steps(align_up(e_lo, interval), align_down(e_hi, interval), interval) {
            let s_end = self.to_geo(e, n_span.0, cell)?;
            let n_end = self.to_geo(e, n_span.1, cell)?;

            let Some((start, end)) = clip_to_lon_bounds(s_end, n_end, cell.left, cell.right)
            else {
                continue;
            };
            output.lines.push(GridLine {
                start,
                end,
                axis: GridAxis::Easting,
                zone_number: cell.zone_number,
                zone_letter: cell.zone_letter,
            });

            if start.lat > cell.bottom + BOUNDARY_TOLERANCE {
                if let Some(connector) = self.southward_connector(&start, cell)? {
                    output.lines.push(connector);
                }
            }
        }

        // EMIT square-id labels for the 100k interval
        if self.interval == GridInterval::Square100Km && padded.zoom >= LABEL_MIN_ZOOM {
            let half = interval / 2.0;
            for e in aligned_steps(align_down(e_lo, interval), align_down(e_hi, interval), interval)
            {
                for n in
                    aligned_steps(align_down(n_lo, interval), align_down(n_hi, interval), interval)
                {
                    let center = self.to_geo(e + half, n + half, cell)?;
                    if cell.contains(&center) && padded.contains(&center) {
                        output.labels.push(GridLabel {
                            position: center,
                            text: square_id(e + half, n + half, cell.zone_number),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn to_geo(&self, easting: f64, northing: f64, cell: &ZoneCell) -> Result<GeoPoint, GridError> {
        inverse(&UtmCoordinate::new(
            easting,
            northing,
            cell.zone_number,
            cell.zone_letter,
        ))
    }

    /// Extension from a clipped east endpoint to the cell's right boundary,
    /// gated so shrunken high-latitude cells don't grow spurious connectors.
    fn eastward_connector(
        &self,
        end: &GeoPoint,
        cell: &ZoneCell,
    ) -> Result<Option<GridLine>, GridError> {
        let interval = self.interval.meters();
        let gap = Haversine.distance(end.to_point(), Point::new(cell.right, end.lat));
        if gap > interval {
            return Ok(None);
        }
        let boundary = forward(&GeoPoint::new(end.lat, cell.right - LON_EDGE_EPSILON))?;
        let snapped = self.to_geo(boundary.easting, align_round(boundary.northing, interval), cell)?;
        // Rounding the northing drags the longitude off the meridian by
        // the convergence angle; pin it back to the boundary
        let meeting = GeoPoint::new(snapped.lat, cell.right);
        Ok(Some(GridLine {
            start: *end,
            end: meeting,
            axis: GridAxis::Northing,
            zone_number: cell.zone_number,
            zone_letter: cell.zone_letter,
        }))
    }

    fn westward_connector(
        &self,
        start: &GeoPoint,
        cell: &ZoneCell,
    ) -> Result<Option<GridLine>, GridError> {
        let interval = self.interval.meters();
        let gap = Haversine.distance(start.to_point(), Point::new(cell.left, start.lat));
        if gap > interval {
            return Ok(None);
        }
        let boundary = forward(&GeoPoint::new(start.lat, cell.left))?;
        let snapped = self.to_geo(boundary.easting, align_round(boundary.northing, interval), cell)?;
        let meeting = GeoPoint::new(snapped.lat, cell.left);
        Ok(Some(GridLine {
            start: meeting,
            end: *start,
            axis: GridAxis::Northing,
            zone_number: cell.zone_number,
            zone_letter: cell.zone_letter,
        }))
    }

    /// Extension from an easting line's south endpoint down to the band's
    /// bottom edge. Both coordinates are snapped so the connector meets
    /// the neighbouring band's grid.
    fn southward_connector(
        &self,
        start: &GeoPoint,
        cell: &ZoneCell,
    ) -> Result<Option<GridLine>, GridError> {
        let interval = self.interval.meters();
        let gap = Haversine.distance(start.to_point(), Point::new(start.lon, cell.bottom));
        if gap > interval {
            return Ok(None);
        }
        let boundary = forward(&GeoPoint::new(cell.bottom, start.lon))?;
        let snapped = self.to_geo(
            align_round(boundary.easting, interval),
            align_round(boundary.northing, interval),
            cell,
        )?;
        let meeting = GeoPoint::new(snapped.lat, snapped.lon.clamp(cell.left, cell.right));
        Ok(Some(GridLine {
            start: meeting,
            end: *start,
            axis: GridAxis::Easting,
            zone_number: cell.zone_number,
            zone_letter: cell.zone_letter,
        }))
    }
}

/// Locator plus generator, run as one atomic regeneration cycle per
/// viewport change.
///
/// # Example
/// ```
/// use mgrs_grid_rs::{GridEngine, GridInterval, ViewportBounds};
///
/// # fn main() -> Result<(), mgrs_grid_rs::GridError> {
/// let engine = GridEngine::new(GridInterval::Square100Km);
/// let frame = engine.run(&ViewportBounds::new(39.2, 38.6, -76.6, -77.4, 9))?;
/// assert_eq!(frame.cells.len(), 1);
/// assert!(!frame.grid.lines.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GridEngine {
    locator: GzdLocator,
    generator: GridGenerator,
}

/// Everything one cycle hands to the renderer: visible cells with their
/// outlines, designator labels, and the interval grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridFrame {
    pub cells: Vec<ZoneCell>,
    pub zone_labels: Vec<GridLabel>,
    pub grid: GridOutput,
}

impl GridEngine {
    pub fn new(interval: GridInterval) -> Self {
        Self {
            locator: GzdLocator::default(),
            generator: GridGenerator::new(interval),
        }
    }

    pub fn with_locator(mut self, locator: GzdLocator) -> Self {
        self.locator = locator;
        self
    }

    /// One full regeneration cycle. Output is a pure function of the
    /// viewport and the static tables; callers replace any previous
    /// frame wholesale.
    pub fn run(&self, viewport: &ViewportBounds) -> Result<GridFrame, GridError> {
        let cells = self.locator.locate(viewport);
        let grid = self.generator.generate(viewport, &cells)?;
        let zone_labels = cells.iter().map(|c| c.label()).collect();
        Ok(GridFrame {
            cells,
            zone_labels,
            grid,
        })
    }
}

fn align_down(value: f64, interval: f64) -> f64 {
    (value / interval).floor() * interval
}

fn align_up(value: f64, interval: f64) -> f64 {
    (value / interval).ceil() * interval
}

fn align_round(value: f64, interval: f64) -> f64 {
    (value / interval).round() * interval
}

/// Iterates aligned values from `first` to `last` inclusive without
/// accumulating float error.
fn aligned_steps(first: f64, last: f64, interval: f64) -> impl Iterator<Item = f64> {
    let count = if last >= first {
        ((last - first) / interval).round() as i64
    } else {
        -1
    };
    (0..=count).map(move |k| first + k as f64 * interval)
}

/// Clips a segment to a cell's longitude bounds by interpolating along its
/// lat/lon slope. Returns `None` when the clipped result is degenerate.
fn clip_to_lon_bounds(
    a: GeoPoint,
    b: GeoPoint,
    left: f64,
    right: f64,
) -> Option<(GeoPoint, GeoPoint)> {
    if a.lon < left && b.lon < left {
        return None;
    }
    if a.lon > right && b.lon > right {
        return None;
    }

    let mut a1 = a;
    let mut b1 = b;
    let dlon = b.lon - a.lon;
    if dlon.abs() > f64::EPSILON {
        let slope = (b.lat - a.lat) / dlon;
        let at = |bound: f64| GeoPoint::new(a.lat + slope * (bound - a.lon), bound);
        if a1.lon < left {
            a1 = at(left);
        } else if a1.lon > right {
            a1 = at(right);
        }
        if b1.lon < left {
            b1 = at(left);
        } else if b1.lon > right {
            b1 = at(right);
        }
    }

    // A clipped length of zero (or a crossed pair) carries no information
    if (b1.lon - a1.lon).abs() < 1e-12 && (b1.lat - a1.lat).abs() < 1e-12 {
        return None;
    }
    if (b.lon > a.lon) && (b1.lon < a1.lon) {
        return None;
    }
    Some((a1, b1))
}
