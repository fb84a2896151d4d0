use crate::core::constants::{
    FALSE_EASTING, FALSE_NORTHING, K0, MAX_UTM_LATITUDE, MIN_UTM_LATITUDE, WGS84_A,
    WGS84_ECC_SQUARED,
};
use crate::core::tables;
use crate::util::coord::{GeoPoint, LatLon, UtmCoordinate};
use crate::util::error::GridError;

/// Determines the UTM zone number for a coordinate.
///
/// Uses the standard 6° slice formula, then applies the internationally
/// agreed adjustments around Norway (zone 32 extends west over band V) and
/// Svalbard (zones 31/33/35/37 widen across band X).
pub fn zone_number_for(lat: f64, lon: f64) -> u8 {
    let mut zone = (((lon + 180.0) / 6.0).floor() as i32) + 1;

    if lon == 180.0 {
        zone = 60;
    }
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        zone = 32;
    }
    if (72.0..84.0).contains(&lat) {
        if (0.0..9.0).contains(&lon) {
            zone = 31;
        } else if (9.0..21.0).contains(&lon) {
            zone = 33;
        } else if (21.0..33.0).contains(&lon) {
            zone = 35;
        } else if (33.0..42.0).contains(&lon) {
            zone = 37;
        }
    }
    zone as u8
}

/// Projects a WGS84 geographic coordinate into its UTM zone.
///
/// # Errors
///
/// Returns [`GridError::InputOutOfRange`] for latitudes at or beyond 84°N
/// or below 80°S, where UTM is undefined and UPS takes over.
///
/// # Example
/// ```
/// use mgrs_grid_rs::{forward, GeoPoint};
///
/// # fn main() -> Result<(), mgrs_grid_rs::GridError> {
/// let utm = forward(&GeoPoint::new(38.8895, -77.0352))?;
/// assert_eq!(utm.zone_number, 18);
/// assert_eq!(utm.zone_letter, 'S');
/// # Ok(())
/// # }
/// ```
pub fn forward(p: &impl LatLon) -> Result<UtmCoordinate, GridError> {
    let lat = p.lat();
    let lon = p.lon();

    if lat >= MAX_UTM_LATITUDE || lat < MIN_UTM_LATITUDE {
        return Err(GridError::InputOutOfRange(lat));
    }
    let band = tables::band_of(lat).ok_or(GridError::InputOutOfRange(lat))?;
    let zone_number = zone_number_for(lat, lon);

    let lat_rad = lat.to_radians();
    let lon_rad = lon.to_radians();
    let lon_origin = ((zone_number - 1) as f64) * 6.0 - 180.0 + 3.0;
    let lon_origin_rad = lon_origin.to_radians();

    let ecc = WGS84_ECC_SQUARED;
    let ecc_prime = ecc / (1.0 - ecc);

    let n = WGS84_A / (1.0 - ecc * lat_rad.sin() * lat_rad.sin()).sqrt();
    let t = lat_rad.tan() * lat_rad.tan();
    let c = ecc_prime * lat_rad.cos() * lat_rad.cos();
    let a = lat_rad.cos() * (lon_rad - lon_origin_rad);

    let m = WGS84_A
        * ((1.0 - ecc / 4.0 - 3.0 * ecc * ecc / 64.0 - 5.0 * ecc * ecc * ecc / 256.0) * lat_rad
            - (3.0 * ecc / 8.0 + 3.0 * ecc * ecc / 32.0 + 45.0 * ecc * ecc * ecc / 1024.0)
                * (2.0 * lat_rad).sin()
            + (15.0 * ecc * ecc / 256.0 + 45.0 * ecc * ecc * ecc / 1024.0) * (4.0 * lat_rad).sin()
            - (35.0 * ecc * ecc * ecc / 3072.0) * (6.0 * lat_rad).sin());

    let easting = K0
        * n
        * (a + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ecc_prime) * a.powi(5) / 120.0)
        + FALSE_EASTING;

    let mut northing = K0
        * (m + n
            * lat_rad.tan()
            * (a * a / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ecc_prime) * a.powi(6) / 720.0));
    if lat < 0.0 {
        northing += FALSE_NORTHING;
    }

    Ok(UtmCoordinate::new(easting, northing, zone_number, band.letter))
}

/// Inverse projection from a UTM coordinate back to WGS84.
///
/// The hemisphere is taken from the band letter. Round-trips [`forward`]
/// to sub-meter accuracy for in-range input.
///
/// # Errors
///
/// Returns [`GridError::UnknownBand`] if the band letter is not C-X, and
/// [`GridError::InvalidZoneNumber`] for zone numbers outside 1-60.
pub fn inverse(utm: &UtmCoordinate) -> Result<GeoPoint, GridError> {
    if tables::band(utm.zone_letter).is_none() {
        return Err(GridError::UnknownBand(utm.zone_letter));
    }
    if utm.zone_number < 1 || utm.zone_number > 60 {
        return Err(GridError::InvalidZoneNumber(utm.zone_number));
    }

    let ecc = WGS84_ECC_SQUARED;
    let ecc_prime = ecc / (1.0 - ecc);
    let e1 = (1.0 - (1.0 - ecc).sqrt()) / (1.0 + (1.0 - ecc).sqrt());

    let x = utm.easting - FALSE_EASTING;
    let y = if utm.is_northern() {
        utm.northing
    } else {
        utm.northing - FALSE_NORTHING
    };
    let lon_origin = ((utm.zone_number - 1) as f64) * 6.0 - 180.0 + 3.0;

    let m = y / K0;
    let mu = m
        / (WGS84_A
            * (1.0 - ecc / 4.0 - 3.0 * ecc * ecc / 64.0 - 5.0 * ecc * ecc * ecc / 256.0));

    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin();

    let n1 = WGS84_A / (1.0 - ecc * phi1.sin() * phi1.sin()).sqrt();
    let t1 = phi1.tan() * phi1.tan();
    let c1 = ecc_prime * phi1.cos() * phi1.cos();
    let r1 = WGS84_A * (1.0 - ecc) / (1.0 - ecc * phi1.sin() * phi1.sin()).powf(1.5);
    let d = x / (n1 * K0);

    let lat = phi1
        - (n1 * phi1.tan() / r1)
            * (d * d / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ecc_prime) * d.powi(4)
                    / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                    - 252.0 * ecc_prime
                    - 3.0 * c1 * c1)
                    * d.powi(6)
                    / 720.0);

    let lon = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
        + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ecc_prime + 24.0 * t1 * t1)
            * d.powi(5)
            / 120.0)
        / phi1.cos();

    Ok(GeoPoint::new(
        lat.to_degrees(),
        lon_origin + lon.to_degrees(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_number_standard() {
        assert_eq!(zone_number_for(40.0, -77.0), 18);
        assert_eq!(zone_number_for(40.0, -180.0), 1);
        assert_eq!(zone_number_for(40.0, 180.0), 60);
        assert_eq!(zone_number_for(40.0, 179.9), 60);
        assert_eq!(zone_number_for(-33.9, 151.2), 56);
    }

    #[test]
    fn test_zone_number_norway() {
        // Norway exception: band V between 3°E and 12°E belongs to zone 32
        assert_eq!(zone_number_for(60.0, 4.0), 32);
        assert_eq!(zone_number_for(60.0, 2.9), 31);
        // Outside band V the standard slices apply
        assert_eq!(zone_number_for(50.0, 4.0), 31);
    }

    #[test]
    fn test_zone_number_svalbard() {
        assert_eq!(zone_number_for(75.0, 8.0), 31);
        assert_eq!(zone_number_for(75.0, 10.0), 33);
        assert_eq!(zone_number_for(75.0, 25.0), 35);
        assert_eq!(zone_number_for(75.0, 36.0), 37);
    }

    #[test]
    fn test_forward_central_meridian() -> Result<(), GridError> {
        // On the central meridian of zone 31 at the equator the easting is
        // exactly the false easting and the northing is zero.
        let utm = forward(&GeoPoint::new(0.0, 3.0))?;
        assert_eq!(utm.zone_number, 31);
        assert_eq!(utm.zone_letter, 'N');
        assert!((utm.easting - 500000.0).abs() < 0.01);
        assert!(utm.northing.abs() < 0.01);
        Ok(())
    }

    #[test]
    fn test_forward_known_point() -> Result<(), GridError> {
        // Equator/prime meridian, a widely published UTM test vector
        let utm = forward(&GeoPoint::new(0.0, 0.0))?;
        assert_eq!(utm.zone_number, 31);
        assert!((utm.easting - 166021.44).abs() < 1.0);
        assert!(utm.northing.abs() < 0.01);
        Ok(())
    }

    #[test]
    fn test_forward_washington_monument() -> Result<(), GridError> {
        let utm = forward(&GeoPoint::new(38.8895, -77.0352))?;
        assert_eq!(utm.zone_number, 18);
        assert_eq!(utm.zone_letter, 'S');
        assert!((utm.easting - 323486.7).abs() < 5.0);
        assert!((utm.northing - 4306483.0).abs() < 5.0);
        Ok(())
    }

    #[test]
    fn test_forward_southern_hemisphere() -> Result<(), GridError> {
        let utm = forward(&GeoPoint::new(-33.8587, 151.2140))?;
        assert_eq!(utm.zone_number, 56);
        assert_eq!(utm.zone_letter, 'H');
        // Southern hemisphere carries the false northing
        assert!(utm.northing > 6000000.0);
        Ok(())
    }

    #[test]
    fn test_forward_polar_rejected() {
        assert!(matches!(
            forward(&GeoPoint::new(85.0, 10.0)),
            Err(GridError::InputOutOfRange(_))
        ));
        assert!(matches!(
            forward(&GeoPoint::new(84.0, 10.0)),
            Err(GridError::InputOutOfRange(_))
        ));
        assert!(matches!(
            forward(&GeoPoint::new(-80.5, 10.0)),
            Err(GridError::InputOutOfRange(_))
        ));
    }

    #[test]
    fn test_inverse_central_meridian() -> Result<(), GridError> {
        let p = inverse(&UtmCoordinate::new(500000.0, 0.0, 31, 'N'))?;
        assert!(p.lat.abs() < 0.000001);
        assert!((p.lon - 3.0).abs() < 0.000001);
        Ok(())
    }

    #[test]
    fn test_inverse_rejects_bad_letter() {
        let utm = UtmCoordinate::new(500000.0, 0.0, 31, 'I');
        assert!(matches!(inverse(&utm), Err(GridError::UnknownBand('I'))));

        let utm = UtmCoordinate::new(500000.0, 0.0, 31, 'Z');
        assert!(inverse(&utm).is_err());
    }

    #[test]
    fn test_inverse_rejects_bad_zone() {
        let utm = UtmCoordinate::new(500000.0, 0.0, 0, 'N');
        assert!(matches!(
            inverse(&utm),
            Err(GridError::InvalidZoneNumber(0))
        ));
    }

    #[test]
    fn test_roundtrip_both_hemispheres() -> Result<(), GridError> {
        let samples = [
            GeoPoint::new(38.8895, -77.0352),
            GeoPoint::new(-33.8587, 151.2140),
            GeoPoint::new(64.27, 5.60),
            GeoPoint::new(-0.001, 0.001),
            GeoPoint::new(75.0, 24.5),
            GeoPoint::new(-79.9, -60.0),
        ];
        for p in samples {
            let utm = forward(&p)?;
            let back = inverse(&utm)?;
            // 0.1m is roughly 1e-6 degrees
            assert!((back.lat - p.lat).abs() < 0.000001, "lat for {:?}", p);
            assert!((back.lon - p.lon).abs() < 0.000001, "lon for {:?}", p);
        }
        Ok(())
    }

    #[test]
    fn test_roundtrip_all_zones() -> Result<(), GridError> {
        // One sample per zone column, alternating hemisphere
        for zone in 1..=60u8 {
            let lon = -180.0 + 6.0 * (zone as f64 - 1.0) + 3.0;
            let lat = if zone % 2 == 0 { 45.0 } else { -45.0 };
            let p = GeoPoint::new(lat, lon);
            let utm = forward(&p)?;
            assert_eq!(utm.zone_number, zone);
            let back = inverse(&utm)?;
            assert!((back.lat - p.lat).abs() < 0.000001);
            assert!((back.lon - p.lon).abs() < 0.000001);
        }
        Ok(())
    }
}
