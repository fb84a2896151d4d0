pub mod coord;
pub mod error;
pub mod mgrs;

pub use coord::{GeoPoint, LatLon, UtmCoordinate};
pub use error::GridError;
pub use mgrs::{DecodedReference, decode, encode, set_for_zone, square_id};
