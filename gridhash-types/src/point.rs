use geo::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

/// A point on the unit sphere, latitude and longitude in radians.
///
/// Latitude spans `[-π/2, π/2]`. Longitude is measured eastward and lives in
/// `[0, 2π)` once normalized; constructors accept any finite value.
///
/// # Examples
///
/// ```
/// use gridhash_types::point::LatLon;
///
/// let p = LatLon::from_degrees(45.0, -90.0).normalized();
/// assert!((p.lon() - 1.5 * std::f64::consts::PI).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a point from latitude and longitude in degrees.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::new(lat.to_radians(), lon.to_radians())
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude and longitude in degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.lat.to_degrees(), self.lon.to_degrees())
    }

    /// Whether the latitude lies on the sphere and both components are finite.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && (-FRAC_PI_2..=FRAC_PI_2).contains(&self.lat)
    }

    /// Wrap the longitude into `[0, 2π)`.
    pub fn normalized(&self) -> Self {
        let mut lon = self.lon.rem_euclid(TAU);
        // rem_euclid of a tiny negative value rounds up to exactly 2π
        if lon >= TAU {
            lon = 0.0;
        }
        Self { lat: self.lat, lon }
    }

    /// Cartesian coordinates of this point on the unit sphere.
    pub fn to_unit_vector(&self) -> [f64; 3] {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
    }
}

/// `geo` points carry longitude as `x` and latitude as `y`, both in degrees.
impl From<Point<f64>> for LatLon {
    fn from(point: Point<f64>) -> Self {
        Self::from_degrees(point.y(), point.x())
    }
}

impl From<LatLon> for Point<f64> {
    fn from(p: LatLon) -> Self {
        let (lat, lon) = p.to_degrees();
        Point::new(lon, lat)
    }
}
