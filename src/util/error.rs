/// Error type for mgrs-grid-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The latitude is outside the UTM system's range (80°S to 84°N).
    InputOutOfRange(f64),
    /// The grid reference string could not be parsed.
    MalformedReference(String),
    /// The requested precision is outside the valid range (1-5).
    InvalidPrecision(u8),
    /// The band letter is not one of C-X (I and O excluded).
    UnknownBand(char),
    /// The zone number is outside the valid range (1-60).
    InvalidZoneNumber(u8),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InputOutOfRange(lat) => {
                write!(f, "Latitude {} is outside the UTM range", lat)
            }
            GridError::MalformedReference(s) => write!(f, "Malformed grid reference: {}", s),
            GridError::InvalidPrecision(p) => write!(f, "Invalid precision: {}", p),
            GridError::UnknownBand(c) => write!(f, "Unknown band letter: {}", c),
            GridError::InvalidZoneNumber(z) => write!(f, "Invalid zone number: {}", z),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GridError::InputOutOfRange(85.0).to_string(),
            "Latitude 85 is outside the UTM range"
        );
        assert_eq!(
            GridError::MalformedReference("XYZ".to_string()).to_string(),
            "Malformed grid reference: XYZ"
        );
        assert_eq!(GridError::InvalidPrecision(6).to_string(), "Invalid precision: 6");
        assert_eq!(GridError::UnknownBand('I').to_string(), "Unknown band letter: I");
        assert_eq!(GridError::InvalidZoneNumber(61).to_string(), "Invalid zone number: 61");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&GridError::UnknownBand('I'));
    }
}
