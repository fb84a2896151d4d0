use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Trait for types that can provide latitude/longitude coordinates.
///
/// Implemented for [`GeoPoint`], `(f64, f64)` tuples in (lat, lon) order,
/// and `geo_types::Point<f64>` (x = lon, y = lat). This allows transform
/// functions to accept any of them.
pub trait LatLon {
    /// Returns the latitude in decimal degrees.
    fn lat(&self) -> f64;
    /// Returns the longitude in decimal degrees.
    fn lon(&self) -> f64;
}

/// A WGS84 geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Converts to a `geo_types::Point` with x = lon, y = lat.
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl LatLon for GeoPoint {
    fn lat(&self) -> f64 {
        self.lat
    }
    fn lon(&self) -> f64 {
        self.lon
    }
}

impl LatLon for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }
    fn lon(&self) -> f64 {
        self.1
    }
}

impl LatLon for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lon(&self) -> f64 {
        self.x()
    }
}

/// A projected UTM coordinate within a single zone.
///
/// Easting and northing are meters from the zone's false origin. The band
/// letter carries the hemisphere: letters N and above are northern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtmCoordinate {
    pub easting: f64,
    pub northing: f64,
    pub zone_number: u8,
    pub zone_letter: char,
}

impl UtmCoordinate {
    pub fn new(easting: f64, northing: f64, zone_number: u8, zone_letter: char) -> Self {
        Self {
            easting,
            northing,
            zone_number,
            zone_letter,
        }
    }

    /// True if this coordinate lies in the northern hemisphere.
    pub fn is_northern(&self) -> bool {
        self.zone_letter >= 'N'
    }
}
