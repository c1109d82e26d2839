//! Validation for input coordinates.

use crate::error::{GridError, Result};
use gridhash_types::LatLon;
use std::f64::consts::FRAC_PI_2;

/// Validates that every coordinate of every point is finite.
///
/// # Examples
///
/// ```
/// use gridhash::compute::validation::validate_cartesian;
///
/// assert!(validate_cartesian(&[[0.0, 1.0], [2.0, 3.0]]).is_ok());
/// assert!(validate_cartesian(&[[0.0, 1.0], [f64::NAN, 3.0]]).is_err());
/// ```
pub fn validate_cartesian<const D: usize>(points: &[[f64; D]]) -> Result<()> {
    for (index, point) in points.iter().enumerate() {
        if let Some(dim) = point.iter().position(|v| !v.is_finite()) {
            return Err(GridError::InvalidCoordinate {
                index,
                reason: format!("coordinate {} must be finite, got {}", dim, point[dim]),
            });
        }
    }
    Ok(())
}

/// Validates a single spherical point.
///
/// Latitude: [-π/2, π/2] radians. Longitude may be any finite value and is
/// wrapped into [0, 2π) when the point is indexed.
pub fn validate_geographic_point(index: usize, point: &LatLon) -> Result<()> {
    if !point.lat.is_finite() {
        return Err(GridError::InvalidCoordinate {
            index,
            reason: format!("latitude must be finite, got {}", point.lat),
        });
    }

    if !point.lon.is_finite() {
        return Err(GridError::InvalidCoordinate {
            index,
            reason: format!("longitude must be finite, got {}", point.lon),
        });
    }

    if !(-FRAC_PI_2..=FRAC_PI_2).contains(&point.lat) {
        return Err(GridError::InvalidCoordinate {
            index,
            reason: format!("latitude out of range [-π/2, π/2]: {}", point.lat),
        });
    }

    Ok(())
}

/// Validates multiple spherical points, reporting the first bad one.
///
/// ```
/// use gridhash::LatLon;
/// use gridhash::compute::validation::validate_geographic;
///
/// let points = [LatLon::new(0.1, 0.2), LatLon::new(2.0, 0.0)];
/// assert!(validate_geographic(&points).is_err());
/// ```
pub fn validate_geographic(points: &[LatLon]) -> Result<()> {
    for (index, point) in points.iter().enumerate() {
        validate_geographic_point(index, point)?;
    }
    Ok(())
}

/// Validates a search radius.
pub fn validate_radius(max_dist: f64) -> Result<()> {
    if !max_dist.is_finite() || max_dist <= 0.0 {
        return Err(GridError::InvalidRadius(max_dist));
    }
    Ok(())
}
