/// WGS84 semi-major axis in meters.
pub const WGS84_A: f64 = 6378137.0;

/// WGS84 first eccentricity squared.
pub const WGS84_ECC_SQUARED: f64 = 0.00669438;

/// UTM central scale factor.
pub const K0: f64 = 0.9996;

/// False easting applied to every zone's central meridian.
pub const FALSE_EASTING: f64 = 500000.0;

/// False northing applied in the southern hemisphere.
pub const FALSE_NORTHING: f64 = 10000000.0;

/// Width of one 100,000-meter square.
pub const BLOCK_SIZE: f64 = 100000.0;

/// The 100k-square letter pattern repeats every 6 zones.
pub const NUM_100K_SETS: u8 = 6;

/// Column-letter origin per set (the column pattern itself repeats every
/// 3 zones, i.e. 18° of longitude).
pub const SET_ORIGIN_COLUMN_LETTERS: &[u8; 6] = b"AJSAJS";

/// Row-letter origin per set (period 2,000,000m of northing, alternating
/// by zone parity).
pub const SET_ORIGIN_ROW_LETTERS: &[u8; 6] = b"AFAFAF";

/// Northern latitude limit of the UTM system; beyond it is UPS territory.
pub const MAX_UTM_LATITUDE: f64 = 84.0;

/// Southern latitude limit of the UTM system.
pub const MIN_UTM_LATITUDE: f64 = -80.0;

/// Latitude nudge used when sampling a cell's top edge, which sits exactly
/// on the next band's bottom edge.
pub const LAT_EDGE_EPSILON: f64 = 0.000001;

/// Longitude nudge used when sampling a cell's right edge, which sits
/// exactly on the next zone's left edge.
pub const LON_EDGE_EPSILON: f64 = 0.000000001;

/// Tolerance when testing whether a clipped endpoint reached a boundary.
pub const BOUNDARY_TOLERANCE: f64 = 0.000001;
