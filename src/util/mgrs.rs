use crate::core::constants::{
    BLOCK_SIZE, NUM_100K_SETS, SET_ORIGIN_COLUMN_LETTERS, SET_ORIGIN_ROW_LETTERS,
};
use crate::core::tables;
use crate::util::coord::UtmCoordinate;
use crate::util::error::GridError;

/// A decoded grid reference: the south-west corner of the referenced cell
/// plus the resolution implied by the number of digit pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedReference {
    pub utm: UtmCoordinate,
    /// Cell size in meters: 100,000 for no digits down to 1 for five pairs.
    pub resolution: f64,
}

/// Returns which of the six letter sets a zone's 100k squares use.
pub fn set_for_zone(zone_number: u8) -> u8 {
    ((zone_number - 1) % NUM_100K_SETS) + 1
}

/// Computes the two-letter 100,000m-square identifier for a UTM position.
///
/// # Example
/// ```
/// use mgrs_grid_rs::square_id;
///
/// // Washington Monument, zone 18
/// assert_eq!(square_id(323486.0, 4306483.0, 18), "UJ");
/// ```
pub fn square_id(easting: f64, northing: f64, zone_number: u8) -> String {
    let set = set_for_zone(zone_number);
    let column = (easting / BLOCK_SIZE).floor() as i32;
    let row = ((northing / BLOCK_SIZE).floor() as i32).rem_euclid(20);
    square_letters(column, row, set)
}

/// Builds the column/row letter pair for a 100k square.
///
/// Columns advance from the set's origin letter and roll over past Z;
/// rows roll over past V. The letters I and O are skipped throughout.
fn square_letters(column: i32, row: i32, set: u8) -> String {
    let index = (set - 1) as usize;
    let col_origin = SET_ORIGIN_COLUMN_LETTERS[index] as i32;
    let row_origin = SET_ORIGIN_ROW_LETTERS[index] as i32;
    let (a, i, o, v, z) = (b'A' as i32, b'I' as i32, b'O' as i32, b'V' as i32, b'Z' as i32);

    let mut col_int = col_origin + column - 1;
    let mut row_int = row_origin + row;
    let mut rollover = false;

    if col_int > z {
        col_int = col_int - z + a - 1;
        rollover = true;
    }
    if col_int == i || (col_origin < i && col_int > i) || ((col_int > i || col_origin < i) && rollover)
    {
        col_int += 1;
    }
    if col_int == o || (col_origin < o && col_int > o) || ((col_int > o || col_origin < o) && rollover)
    {
        col_int += 1;
        if col_int == i {
            col_int += 1;
        }
    }
    if col_int > z {
        col_int = col_int - z + a - 1;
    }

    if row_int > v {
        row_int = row_int - v + a - 1;
        rollover = true;
    } else {
        rollover = false;
    }
    if row_int == i || (row_origin < i && row_int > i) || ((row_int > i || row_origin < i) && rollover)
    {
        row_int += 1;
    }
    if row_int == o || (row_origin < o && row_int > o) || ((row_int > o || row_origin < o) && rollover)
    {
        row_int += 1;
        if row_int == i {
            row_int += 1;
        }
    }
    if row_int > v {
        row_int = row_int - v + a - 1;
    }

    let mut id = String::with_capacity(2);
    id.push(col_int as u8 as char);
    id.push(row_int as u8 as char);
    id
}

/// Encodes a UTM coordinate as a grid-reference string.
///
/// The layout is `<zone><band> <100k-square-id> <easting digits><northing
/// digits>`, with `precision` digit pairs selecting the resolution from
/// 10,000m (1 pair) down to 1m (5 pairs).
///
/// # Example
/// ```
/// use mgrs_grid_rs::{encode, UtmCoordinate};
///
/// # fn main() -> Result<(), mgrs_grid_rs::GridError> {
/// let utm = UtmCoordinate::new(323394.0, 4306546.0, 18, 'S');
/// assert_eq!(encode(&utm, 5)?, "18S UJ 2339406546");
/// # Ok(())
/// # }
/// ```
pub fn encode(utm: &UtmCoordinate, precision: u8) -> Result<String, GridError> {
    if precision < 1 || precision > 5 {
        return Err(GridError::InvalidPrecision(precision));
    }
    if utm.zone_number < 1 || utm.zone_number > 60 {
        return Err(GridError::InvalidZoneNumber(utm.zone_number));
    }
    if tables::band(utm.zone_letter).is_none() {
        return Err(GridError::UnknownBand(utm.zone_letter));
    }

    let easting_block = format!("{:05}", (utm.easting.floor() as i64).rem_euclid(100000));
    let northing_block = format!("{:05}", (utm.northing.floor() as i64).rem_euclid(100000));
    let n = precision as usize;

    Ok(format!(
        "{}{} {} {}{}",
        utm.zone_number,
        utm.zone_letter,
        square_id(utm.easting, utm.northing, utm.zone_number),
        &easting_block[..n],
        &northing_block[..n],
    ))
}

/// Decodes a grid-reference string to the south-west corner of the cell it
/// names. Whitespace is ignored and lowercase input is accepted.
///
/// # Errors
///
/// Fails fast with [`GridError::MalformedReference`] on any structural
/// problem; a partial result is never returned.
pub fn decode(reference: &str) -> Result<DecodedReference, GridError> {
    let clean: String = reference
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    if clean.is_empty() {
        return Err(GridError::MalformedReference("empty string".to_string()));
    }

    let bytes = clean.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == 0 || i > 2 {
        return Err(GridError::MalformedReference(format!(
            "expected 1-2 zone digits in '{}'",
            clean
        )));
    }
    let zone_number: u8 = clean[..i]
        .parse()
        .map_err(|_| GridError::MalformedReference(clean.clone()))?;
    if zone_number < 1 || zone_number > 60 {
        return Err(GridError::MalformedReference(format!(
            "zone {} out of range",
            zone_number
        )));
    }
    if i + 3 > bytes.len() {
        return Err(GridError::MalformedReference(format!(
            "'{}' is too short",
            clean
        )));
    }

    let zone_letter = bytes[i] as char;
    i += 1;
    if tables::band(zone_letter).is_none() {
        return Err(GridError::MalformedReference(format!(
            "invalid band letter '{}'",
            zone_letter
        )));
    }

    let col_letter = bytes[i];
    let row_letter = bytes[i + 1];
    i += 2;
    if !col_letter.is_ascii_uppercase() || !row_letter.is_ascii_uppercase() {
        return Err(GridError::MalformedReference(format!(
            "invalid 100k square letters in '{}'",
            clean
        )));
    }

    let set = set_for_zone(zone_number);
    let east_100k = easting_from_letter(col_letter, set)?;
    let mut north_100k = northing_from_letter(row_letter, set)?;
    while north_100k < min_northing(zone_letter)? {
        north_100k += 2000000.0;
    }

    let digits = &clean[i..];
    if digits.len() % 2 != 0 || digits.len() > 10 {
        return Err(GridError::MalformedReference(format!(
            "expected 0-5 digit pairs, got '{}'",
            digits
        )));
    }
    let pairs = digits.len() / 2;

    let mut easting = east_100k;
    let mut northing = north_100k;
    let mut resolution = BLOCK_SIZE;
    if pairs > 0 {
        resolution = BLOCK_SIZE / 10f64.powi(pairs as i32);
        let e: f64 = digits[..pairs]
            .parse()
            .map_err(|_| GridError::MalformedReference(format!("bad digits '{}'", digits)))?;
        let n: f64 = digits[pairs..]
            .parse()
            .map_err(|_| GridError::MalformedReference(format!("bad digits '{}'", digits)))?;
        easting += e * resolution;
        northing += n * resolution;
    }

    Ok(DecodedReference {
        utm: UtmCoordinate::new(easting, northing, zone_number, zone_letter),
        resolution,
    })
}

/// Easting of a 100k column letter relative to the zone's false origin.
fn easting_from_letter(letter: u8, set: u8) -> Result<f64, GridError> {
    let mut cur = SET_ORIGIN_COLUMN_LETTERS[(set - 1) as usize];
    let mut easting = BLOCK_SIZE;
    let mut rewound = false;
    while cur != letter {
        cur += 1;
        if cur == b'I' {
            cur += 1;
        }
        if cur == b'O' {
            cur += 1;
        }
        if cur > b'Z' {
            if rewound {
                return Err(GridError::MalformedReference(format!(
                    "invalid column letter '{}'",
                    letter as char
                )));
            }
            cur = b'A';
            rewound = true;
        }
        easting += BLOCK_SIZE;
    }
    Ok(easting)
}

/// Northing of a 100k row letter within its 2,000,000m repeat block.
fn northing_from_letter(letter: u8, set: u8) -> Result<f64, GridError> {
    if letter > b'V' {
        return Err(GridError::MalformedReference(format!(
            "invalid row letter '{}'",
            letter as char
        )));
    }
    let mut cur = SET_ORIGIN_ROW_LETTERS[(set - 1) as usize];
    let mut northing = 0.0;
    let mut rewound = false;
    while cur != letter {
        cur += 1;
        if cur == b'I' {
            cur += 1;
        }
        if cur == b'O' {
            cur += 1;
        }
        if cur > b'V' {
            if rewound {
                return Err(GridError::MalformedReference(format!(
                    "invalid row letter '{}'",
                    letter as char
                )));
            }
            cur = b'A';
            rewound = true;
        }
        northing += BLOCK_SIZE;
    }
    Ok(northing)
}

/// Minimum northing of a latitude band, used to pick the right 2,000,000m
/// repeat block when decoding.
fn min_northing(zone_letter: char) -> Result<f64, GridError> {
    let northing = match zone_letter {
        'C' => 1100000.0,
        'D' => 2000000.0,
        'E' => 2800000.0,
        'F' => 3700000.0,
        'G' => 4600000.0,
        'H' => 5500000.0,
        'J' => 6400000.0,
        'K' => 7300000.0,
        'L' => 8200000.0,
        'M' => 9100000.0,
        'N' => 0.0,
        'P' => 800000.0,
        'Q' => 1700000.0,
        'R' => 2600000.0,
        'S' => 3500000.0,
        'T' => 4400000.0,
        'U' => 5300000.0,
        'V' => 6200000.0,
        'W' => 7000000.0,
        'X' => 7900000.0,
        _ => return Err(GridError::UnknownBand(zone_letter)),
    };
    Ok(northing)
}
