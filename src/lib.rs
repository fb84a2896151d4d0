//! # mgrs-grid-rs
//!
//! An MGRS grid overlay engine: WGS84/UTM transforms, a grid-reference
//! codec, and clipped grid-line generation for map viewports.
//!
//! There are currently three main entry points.
//!
//! ### 1. Coordinate transforms and the MGRS codec
//!
//! ```
//! use mgrs_grid_rs::{GeoPoint, encode, forward};
//!
//! # fn main() -> Result<(), mgrs_grid_rs::GridError> {
//! let utm = forward(&GeoPoint::new(38.8895, -77.0352))?;
//! assert_eq!(utm.zone_number, 18);
//! assert_eq!(utm.zone_letter, 'S');
//!
//! let reference = encode(&utm, 5)?;
//! assert!(reference.starts_with("18S UJ"));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GzdLocator` - Visible Grid Zones
//!
//! ```
//! use mgrs_grid_rs::{GzdLocator, ViewportBounds};
//!
//! let locator = GzdLocator::default();
//! let cells = locator.locate(&ViewportBounds::new(41.1, 40.9, -76.9, -77.1, 10));
//! assert_eq!(cells[0].designator(), "18T");
//! ```
//!
//! ### 3. `GridEngine` - Full Overlay Frames
//!
//! One call per viewport change produces everything a renderer draws:
//! zone outlines, zone labels, and the interval grid with its square
//! labels.
//!
//! ```
//! use mgrs_grid_rs::{GridEngine, GridInterval, ViewportBounds};
//!
//! # fn main() -> Result<(), mgrs_grid_rs::GridError> {
//! let engine = GridEngine::new(GridInterval::Square100Km);
//! let frame = engine.run(&ViewportBounds::new(39.2, 38.6, -76.6, -77.4, 9))?;
//! assert!(!frame.grid.lines.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod io;
pub mod util;

pub use api::{
    GridAxis, GridEngine, GridFrame, GridGenerator, GridInterval, GridLabel, GridLine, GridMode,
    GridOutput, GzdLocator, ViewportBounds, ZoneCell,
};
pub use core::{
    BLOCK_SIZE, FALSE_EASTING, FALSE_NORTHING, K0, MAX_UTM_LATITUDE, MIN_UTM_LATITUDE,
    WGS84_A, WGS84_ECC_SQUARED, forward, inverse, zone_number_for,
};
pub use io::{frame_to_geojson, grid_to_geojson, lines_to_wkt, outline_to_wkt};
pub use util::{
    DecodedReference, GeoPoint, GridError, LatLon, UtmCoordinate, decode, encode, square_id,
};

pub use geo_types;
pub use geojson;
pub use wkt;
