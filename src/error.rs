/// Error type for globenet-rs operations.
#[derive(Debug, PartialEq)]
pub enum GlobeError {
    /// The panel index lies outside the layout's lon/lat ranges.
    InvalidPanelIndex { lon: u8, lat: i8 },
    /// The layout configuration is inconsistent (e.g. coefficient rows missing).
    InvalidLayout(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// File I/O error.
    IoError(String),
    /// CSV writing error.
    CsvError(String),
    /// JSON (de)serialization error.
    SerializationError(String),
}

impl std::fmt::Display for GlobeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlobeError::InvalidPanelIndex { lon, lat } => {
                write!(f, "Invalid panel index: lon {}, lat {}", lon, lat)
            }
            GlobeError::InvalidLayout(msg) => write!(f, "Invalid layout: {}", msg),
            GlobeError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            GlobeError::IoError(msg) => write!(f, "IO error: {}", msg),
            GlobeError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            GlobeError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for GlobeError {}

impl From<std::io::Error> for GlobeError {
    fn from(e: std::io::Error) -> Self {
        GlobeError::IoError(e.to_string())
    }
}
