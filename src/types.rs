use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid coordinate format: {0:?} (expected e.g. \"26.86296° N, 81.04288° E\")")]
    InvalidFormat(String),
    #[error("invalid pair line: {0}")]
    InvalidPairLine(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    #[error("invalid coordinate format (expected e.g. \"26.86296° N, 81.04288° E\")")]
    InvalidFormat,
    #[error("coordinate out of range (latitude -90° to 90°, longitude -180° to 180°)")]
    OutOfRange,
}

/// A parsed latitude/longitude pair in decimal degrees. The parser does not
/// range-check; validation happens in the distance calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}°, {:.5}°", self.lat, self.lng)
    }
}
