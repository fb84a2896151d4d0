pub mod constants;
pub mod tables;
pub mod transform;

pub use constants::{
    BLOCK_SIZE, FALSE_EASTING, FALSE_NORTHING, K0, MAX_UTM_LATITUDE, MIN_UTM_LATITUDE,
    NUM_100K_SETS, WGS84_A, WGS84_ECC_SQUARED,
};
pub use tables::{
    LATITUDE_BANDS, LatBand, ZONE_OVERRIDES, ZoneColumn, ZoneOverride, band, band_of, column,
    override_for,
};
pub use transform::{forward, inverse, zone_number_for};
