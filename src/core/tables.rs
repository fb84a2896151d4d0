use crate::util::error::GridError;

/// A band of latitude, 8° tall (12° for the northernmost band X).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatBand {
    pub letter: char,
    pub top: f64,
    pub bottom: f64,
}

/// A UTM zone column, 6° of longitude wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneColumn {
    pub number: u8,
    pub left: f64,
    pub right: f64,
}

/// Boundary override for the irregular zones around Norway and Svalbard.
///
/// Degenerate entries (32X, 34X, 36X) are absorbed by their neighbours and
/// must never be materialized as visible cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneOverride {
    pub zone: u8,
    pub band: char,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub degenerate: bool,
}

/// The 20 latitude bands C-X, south to north. I and O are skipped to avoid
/// confusion with the digits 1 and 0.
pub const LATITUDE_BANDS: [LatBand; 20] = [
    LatBand { letter: 'C', top: -72.0, bottom: -80.0 },
    LatBand { letter: 'D', top: -64.0, bottom: -72.0 },
    LatBand { letter: 'E', top: -56.0, bottom: -64.0 },
    LatBand { letter: 'F', top: -48.0, bottom: -56.0 },
    LatBand { letter: 'G', top: -40.0, bottom: -48.0 },
    LatBand { letter: 'H', top: -32.0, bottom: -40.0 },
    LatBand { letter: 'J', top: -24.0, bottom: -32.0 },
    LatBand { letter: 'K', top: -16.0, bottom: -24.0 },
    LatBand { letter: 'L', top: -8.0, bottom: -16.0 },
    LatBand { letter: 'M', top: 0.0, bottom: -8.0 },
    LatBand { letter: 'N', top: 8.0, bottom: 0.0 },
    LatBand { letter: 'P', top: 16.0, bottom: 8.0 },
    LatBand { letter: 'Q', top: 24.0, bottom: 16.0 },
    LatBand { letter: 'R', top: 32.0, bottom: 24.0 },
    LatBand { letter: 'S', top: 40.0, bottom: 32.0 },
    LatBand { letter: 'T', top: 48.0, bottom: 40.0 },
    LatBand { letter: 'U', top: 56.0, bottom: 48.0 },
    LatBand { letter: 'V', top: 64.0, bottom: 56.0 },
    LatBand { letter: 'W', top: 72.0, bottom: 64.0 },
    LatBand { letter: 'X', top: 84.0, bottom: 72.0 },
];

/// Boundary overrides for the irregular zones.
///
/// 31V/32V bend around the Norwegian coast at 3°E; the X-band zones around
/// Svalbard widen their odd-numbered neighbours and drop the even ones.
pub const ZONE_OVERRIDES: [ZoneOverride; 9] = [
    ZoneOverride { zone: 31, band: 'V', left: None, right: Some(3.0), degenerate: false },
    ZoneOverride { zone: 32, band: 'V', left: Some(3.0), right: None, degenerate: false },
    ZoneOverride { zone: 31, band: 'X', left: None, right: Some(9.0), degenerate: false },
    ZoneOverride { zone: 32, band: 'X', left: None, right: None, degenerate: true },
    ZoneOverride { zone: 33, band: 'X', left: Some(9.0), right: Some(21.0), degenerate: false },
    ZoneOverride { zone: 34, band: 'X', left: None, right: None, degenerate: true },
    ZoneOverride { zone: 35, band: 'X', left: Some(21.0), right: Some(33.0), degenerate: false },
    ZoneOverride { zone: 36, band: 'X', left: None, right: None, degenerate: true },
    ZoneOverride { zone: 37, band: 'X', left: Some(33.0), right: None, degenerate: false },
];

/// Looks up a latitude band by its letter.
pub fn band(letter: char) -> Option<&'static LatBand> {
    LATITUDE_BANDS.iter().find(|b| b.letter == letter)
}

/// Returns the latitude band containing the given latitude, or `None`
/// outside the UTM range.
pub fn band_of(lat: f64) -> Option<&'static LatBand> {
    LATITUDE_BANDS
        .iter()
        .find(|b| lat >= b.bottom && lat < b.top)
}

/// Returns the nominal zone column for a zone number (1-60).
pub fn column(number: u8) -> Result<ZoneColumn, GridError> {
    if number < 1 || number > 60 {
        return Err(GridError::InvalidZoneNumber(number));
    }
    let left = -180.0 + 6.0 * (number - 1) as f64;
    Ok(ZoneColumn {
        number,
        left,
        right: left + 6.0,
    })
}

/// Looks up the boundary override for a (zone, band) pair, if one exists.
pub fn override_for(zone: u8, band: char) -> Option<&'static ZoneOverride> {
    ZONE_OVERRIDES
        .iter()
        .find(|o| o.zone == zone && o.band == band)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_lookup() {
        let s = band('S').unwrap();
        assert_eq!(s.top, 40.0);
        assert_eq!(s.bottom, 32.0);

        assert!(band('I').is_none());
        assert!(band('O').is_none());
        assert!(band('A').is_none());
    }

    #[test]
    fn test_band_of_latitude() {
        assert_eq!(band_of(38.9).unwrap().letter, 'S');
        assert_eq!(band_of(40.0).unwrap().letter, 'T');
        assert_eq!(band_of(-0.1).unwrap().letter, 'M');
        assert_eq!(band_of(0.0).unwrap().letter, 'N');
        assert_eq!(band_of(83.9).unwrap().letter, 'X');
        assert!(band_of(84.0).is_none());
        assert!(band_of(-80.1).is_none());
    }

    #[test]
    fn test_column_bounds() -> Result<(), GridError> {
        let c1 = column(1)?;
        assert_eq!(c1.left, -180.0);
        assert_eq!(c1.right, -174.0);

        let c18 = column(18)?;
        assert_eq!(c18.left, -78.0);
        assert_eq!(c18.right, -72.0);

        let c60 = column(60)?;
        assert_eq!(c60.right, 180.0);
        Ok(())
    }

    #[test]
    fn test_column_out_of_range() {
        assert!(matches!(column(0), Err(GridError::InvalidZoneNumber(0))));
        assert!(matches!(column(61), Err(GridError::InvalidZoneNumber(61))));
    }

    #[test]
    fn test_norway_overrides() {
        let v31 = override_for(31, 'V').unwrap();
        assert_eq!(v31.right, Some(3.0));
        assert_eq!(v31.left, None);

        let v32 = override_for(32, 'V').unwrap();
        assert_eq!(v32.left, Some(3.0));
    }

    #[test]
    fn test_svalbard_overrides() {
        assert!(override_for(32, 'X').unwrap().degenerate);
        assert!(override_for(34, 'X').unwrap().degenerate);
        assert!(override_for(36, 'X').unwrap().degenerate);

        let x33 = override_for(33, 'X').unwrap();
        assert_eq!(x33.left, Some(9.0));
        assert_eq!(x33.right, Some(21.0));
    }

    #[test]
    fn test_no_override_for_regular_zones() {
        assert!(override_for(18, 'S').is_none());
        assert!(override_for(31, 'W').is_none());
    }
}
