//! Range validation and great-circle distance via the haversine formula.

use crate::coordinate_parser::parse_point;
use crate::types::{DistanceError, GeoPoint};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A computed pair: both parsed endpoints and the rounded distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDistance {
    pub point1: GeoPoint,
    pub point2: GeoPoint,
    pub meters: f64,
}

/// Parse both inputs, validate ranges, and compute the distance in meters,
/// rounded to two decimals. Parse failures collapse to `InvalidFormat`
/// without exposing which input was at fault.
pub fn calculate(raw1: &str, raw2: &str) -> Result<f64, DistanceError> {
    calculate_pair(raw1, raw2).map(|pair| pair.meters)
}

pub fn calculate_pair(raw1: &str, raw2: &str) -> Result<PairDistance, DistanceError> {
    let point1 = parse_point(raw1).map_err(|_| DistanceError::InvalidFormat)?;
    let point2 = parse_point(raw2).map_err(|_| DistanceError::InvalidFormat)?;

    validate_point(point1)?;
    validate_point(point2)?;

    let meters = round_centi(haversine_m(point1, point2));
    Ok(PairDistance {
        point1,
        point2,
        meters,
    })
}

fn validate_point(point: GeoPoint) -> Result<(), DistanceError> {
    if point.lat.abs() > 90.0 || point.lng.abs() > 180.0 {
        return Err(DistanceError::OutOfRange);
    }
    Ok(())
}

/// Haversine distance in meters, unrounded.
pub fn haversine_m(point1: GeoPoint, point2: GeoPoint) -> f64 {
    let phi1 = point1.lat.to_radians();
    let phi2 = point2.lat.to_radians();
    let delta_phi = (point2.lat - point1.lat).to_radians();
    let delta_lambda = (point2.lng - point1.lng).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

fn round_centi(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
