/// Error type for tripcode-rs operations.
#[derive(Debug, PartialEq)]
pub enum TripcodeError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    OutOfRangeInput { latitude: f64, longitude: f64 },
    /// The code contains a character that is neither a tripcode digit nor `-`.
    InvalidCodeCharacter(char),
    /// The code has fewer digits than a short tripcode needs.
    TruncatedCode(usize),
    /// The code has more digits than a full tripcode holds.
    CodeTooLong(usize),
    /// A shifted or rounded scaled value left the representable range.
    OffsetOverflow(i64),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
    /// Failed to parse a point from a geometry string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for TripcodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripcodeError::OutOfRangeInput {
                latitude,
                longitude,
            } => write!(f, "Coordinate out of range: ({}, {})", latitude, longitude),
            TripcodeError::InvalidCodeCharacter(c) => {
                write!(f, "Invalid code character: {:?}", c)
            }
            TripcodeError::TruncatedCode(n) => write!(f, "Truncated code: {} digits", n),
            TripcodeError::CodeTooLong(n) => write!(f, "Code too long: {} digits", n),
            TripcodeError::OffsetOverflow(v) => write!(f, "Offset overflow: {}", v),
            TripcodeError::IoError(msg) => write!(f, "IO error: {}", msg),
            TripcodeError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            TripcodeError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for TripcodeError {}
