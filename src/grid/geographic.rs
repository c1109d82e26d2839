//! Spherical cell hashing.
//!
//! A hash packs three fields, low bits first: the hemisphere bit, the
//! latitude band, and the longitude bin within that band.
//!
//! ```text
//! | i_long (bits_long) | i_lat (bits_lat) | sign (1) |
//! ```
//!
//! Bands nearer the poles hold fewer, wider bins, so two vertically adjacent
//! cells rarely share bin boundaries. Neighbor enumeration therefore re-bins
//! the query longitude in every band it visits.

use super::CellHash;
use super::sizing::{GeoGeometry, mask, shl};
use gridhash_types::LatLon;
use smallvec::SmallVec;
use std::f64::consts::FRAC_PI_2;

/// Neighbor cell list; three bands of three bins stay inline.
pub type CellNeighbors = SmallVec<[CellHash; 9]>;

/// Bands with at most this many bins are always enumerated whole.
const SMALL_BAND_BINS: u64 = 3;

/// Absolute slack added to the longitude reach of a query to absorb rounding
/// in bin assignment.
const REACH_SLACK: f64 = 1e-9;

/// Maps spherical points to cells of a [`GeoGeometry`] and enumerates the
/// cells that may hold points within `max_dist` of a query point.
#[derive(Debug, Clone)]
pub struct GeoHasher {
    geometry: GeoGeometry,
}

impl GeoHasher {
    pub fn new(geometry: GeoGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &GeoGeometry {
        &self.geometry
    }

    pub fn pack(&self, sign: u64, band: u64, bin: u64) -> CellHash {
        sign | shl(band, 1) | shl(bin, 1 + self.geometry.bits_lat)
    }

    /// Split a hash into `(sign, band, bin)`.
    pub fn unpack(&self, hash: CellHash) -> (u64, u64, u64) {
        let sign = hash & 1;
        let band = (hash >> 1) & mask(self.geometry.bits_lat);
        let bin = hash.checked_shr(1 + self.geometry.bits_lat).unwrap_or(0);
        (sign, band, bin)
    }

    /// Cell hash of a point whose longitude is already in `[0, 2π)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridhash::grid::{GeoGeometry, GeoHasher};
    /// use gridhash::LatLon;
    ///
    /// let hasher = GeoHasher::new(GeoGeometry::new(0.5, 1e-8).unwrap());
    /// let hash = hasher.hash(&LatLon::new(0.7, 1.0));
    /// // northern hemisphere, band 1, first of 6 bins
    /// assert_eq!(hasher.unpack(hash), (1, 1, 0));
    /// ```
    pub fn hash(&self, point: &LatLon) -> CellHash {
        let (sign, band) = self.geometry.band_of(point.lat);
        let bin = self.geometry.lon_bin(point.lon, self.geometry.n_long(band));
        self.pack(sign, band, bin)
    }

    /// Largest longitude offset, within the signed latitude range `[lo, hi]`,
    /// of any point closer than `max_dist` to `point`. `None` when the
    /// query's cap covers a pole and every longitude qualifies.
    ///
    /// Over a cap that misses both poles, the half-width in longitude at
    /// latitude φ rises to a single peak and falls again, so the widest spot
    /// inside the range is the peak clamped into it.
    fn longitude_reach(&self, point: &LatLon, lo: f64, hi: f64) -> Option<f64> {
        let max_dist = self.geometry.max_dist;
        if point.lat.abs() + max_dist >= FRAC_PI_2 {
            return None;
        }

        let lo = lo.max(point.lat - max_dist);
        let hi = hi.min(point.lat + max_dist);
        if lo > hi {
            return Some(0.0);
        }

        let (sin_lat, cos_lat) = point.lat.sin_cos();
        let peak = (sin_lat / max_dist.cos()).clamp(-1.0, 1.0).asin();
        let lat = peak.clamp(lo, hi);
        let cos_dlon = (max_dist.cos() - sin_lat * lat.sin()) / (cos_lat * lat.cos());
        Some(cos_dlon.clamp(-1.0, 1.0).acos() + REACH_SLACK)
    }

    /// Hashes of every cell that can hold a point closer than `max_dist` to
    /// `point`, where `hash` is the point's own cell.
    ///
    /// Visits the point's band and the bands directly poleward and
    /// equatorward of it. Stepping equatorward out of band 0 crosses into
    /// band 0 of the other hemisphere. In each visited band the bins are
    /// counted afresh: small bands are taken whole, others contribute the bin
    /// under the query longitude plus `k` bins either side, wrapping around
    /// the band. `k` is one unless the query's distance cap is wider than a
    /// bin at that latitude.
    pub fn neighbors(&self, hash: CellHash, point: &LatLon) -> CellNeighbors {
        let (sign, band, _) = self.unpack(hash);
        let max_dist = self.geometry.max_dist;
        let mut cells = CellNeighbors::new();

        for step in [-1i64, 0, 1] {
            let (band_sign, band) = match band as i64 + step {
                -1 => (1 - sign, 0),
                b => (sign, b as u64),
            };
            if band > self.geometry.max_band {
                continue;
            }

            let n_long = self.geometry.n_long(band);
            let lo = band as f64 * max_dist;
            let hi = lo + max_dist;
            let (lo, hi) = if band_sign == 1 { (lo, hi) } else { (-hi, -lo) };

            let span = if n_long <= SMALL_BAND_BINS {
                None
            } else {
                self.longitude_reach(point, lo, hi).and_then(|reach| {
                    let k = ((reach / self.geometry.bin_width(band)).ceil() as u64).max(1);
                    (2 * k + 1 < n_long).then_some(k)
                })
            };

            match span {
                None => {
                    for bin in 0..n_long {
                        cells.push(self.pack(band_sign, band, bin));
                    }
                }
                Some(k) => {
                    let center = self.geometry.lon_bin(point.lon, n_long);
                    for offset in 0..=2 * k {
                        let bin = (center + n_long + offset - k) % n_long;
                        cells.push(self.pack(band_sign, band, bin));
                    }
                }
            }
        }
        cells
    }
}
