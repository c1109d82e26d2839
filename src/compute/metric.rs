//! Exact pairwise distances.
//!
//! The grid only narrows the candidate set; these functions decide which
//! candidates are real neighbors.

use gridhash_types::LatLon;

/// Straight-line distance between two points in `D` dimensions.
///
/// # Examples
///
/// ```rust
/// use gridhash::compute::euclidean;
///
/// assert_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
/// ```
pub fn euclidean<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Angular great-circle distance on the unit sphere, by the spherical law of
/// cosines.
///
/// The cosine is clamped to `[-1, 1]` so rounding on (near-)identical or
/// antipodal points never yields NaN.
///
/// # Examples
///
/// ```rust
/// use gridhash::LatLon;
/// use gridhash::compute::great_circle;
/// use std::f64::consts::PI;
///
/// let a = LatLon::new(0.0, 0.0);
/// let b = LatLon::new(0.0, PI / 2.0);
/// assert!((great_circle(a, b) - PI / 2.0).abs() < 1e-12);
/// ```
pub fn great_circle(a: LatLon, b: LatLon) -> f64 {
    let g = a.lat.sin() * b.lat.sin() + a.lat.cos() * b.lat.cos() * (a.lon - b.lon).cos();
    g.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Distance, Euclidean, Haversine, Point};
    use std::f64::consts::PI;

    const EARTH_RADIUS_M: f64 = 6_371_008.8;

    #[test]
    fn test_euclidean_matches_geo() {
        let a = Point::new(1.5, -2.0);
        let b = Point::new(-3.25, 7.0);
        let expected = Euclidean.distance(a, b);
        let d = euclidean(&[a.x(), a.y()], &[b.x(), b.y()]);
        assert!((d - expected).abs() < 1e-12);
    }

    #[test]
    fn test_euclidean_higher_dimensions() {
        assert_eq!(euclidean(&[1.0, 2.0, 2.0], &[0.0, 0.0, 0.0]), 3.0);
        assert_eq!(euclidean(&[5.0], &[2.0]), 3.0);
    }

    #[test]
    fn test_great_circle_matches_haversine() {
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);
        let expected = Haversine.distance(nyc, la) / EARTH_RADIUS_M;
        let d = great_circle(LatLon::from(nyc), LatLon::from(la));
        assert!((d - expected).abs() / expected < 1e-6);
    }

    #[test]
    fn test_great_circle_edge_cases() {
        let p = LatLon::new(0.7, 1.3);
        assert_eq!(great_circle(p, p), 0.0);

        let north = LatLon::new(PI / 2.0, 0.0);
        let south = LatLon::new(-PI / 2.0, 2.0);
        assert!((great_circle(north, south) - PI).abs() < 1e-9);

        // Longitude wrap: 0.02 rad apart across the seam
        let a = LatLon::new(0.0, 0.01);
        let b = LatLon::new(0.0, 2.0 * PI - 0.01);
        assert!((great_circle(a, b) - 0.02).abs() < 1e-9);
    }
}
