use crate::util::coord::LatLon;
use serde::{Deserialize, Serialize};

/// The visible region of a map plus its integer zoom level.
///
/// Bounds are decimal degrees. Antimeridian-wrapping viewports (west >
/// east) are not supported.
///
/// # Example
///
/// ```
/// use mgrs_grid_rs::ViewportBounds;
///
/// let vp = ViewportBounds::new(40.1, 39.9, -76.9, -77.1, 12);
/// assert!((vp.height() - 0.2).abs() < 1e-9);
/// let padded = vp.padded(0.5);
/// assert!(padded.north > vp.north);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
    pub zoom: u8,
}

impl ViewportBounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64, zoom: u8) -> Self {
        Self {
            north,
            south,
            east,
            west,
            zoom,
        }
    }

    /// Builds a viewport from a center point and half-extents in degrees.
    pub fn around(center: &impl LatLon, half_lat: f64, half_lon: f64, zoom: u8) -> Self {
        Self {
            north: center.lat() + half_lat,
            south: center.lat() - half_lat,
            east: center.lon() + half_lon,
            west: center.lon() - half_lon,
            zoom,
        }
    }

    /// North-south extent in degrees.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// East-west extent in degrees.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Expands every side by `ratio` times the current extent, masking pan
    /// latency the same way Leaflet's `pad()` does.
    pub fn padded(&self, ratio: f64) -> Self {
        let lat_buffer = self.height() * ratio;
        let lon_buffer = self.width() * ratio;
        Self {
            north: self.north + lat_buffer,
            south: self.south - lat_buffer,
            east: self.east + lon_buffer,
            west: self.west - lon_buffer,
            zoom: self.zoom,
        }
    }

    /// True if the point lies within the bounds (edges inclusive).
    pub fn contains(&self, p: &impl LatLon) -> bool {
        p.lat() <= self.north && p.lat() >= self.south && p.lon() <= self.east && p.lon() >= self.west
    }
}
