//! Cell sizing.
//!
//! Derives how many bits each dimension of a cell hash needs so that a cell
//! is never narrower than `max_dist`.

use super::CellHash;
use crate::compute::validation::validate_radius;
use crate::error::{GridError, Result};
use gridhash_types::Extent;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Total bits available in a [`CellHash`].
pub const HASH_BITS: u32 = CellHash::BITS;

/// Bits needed to count `ratio` cells, with `epsilon` added before the
/// logarithm so an exact power of two still gets room for its last cell.
pub(crate) fn bits_for(ratio: f64, epsilon: f64) -> u32 {
    let bits = (ratio + epsilon).log2().ceil();
    if bits.is_nan() || bits <= 0.0 {
        0
    } else {
        bits.min(f64::from(HASH_BITS + 1)) as u32
    }
}

/// Largest value representable in `bits` bits.
pub(crate) fn mask(bits: u32) -> u64 {
    if bits == 0 { 0 } else { u64::MAX >> (HASH_BITS - bits) }
}

/// Left shift that yields zero instead of overflowing once the shift reaches
/// the width of the hash; only zero-valued fields are ever shifted that far.
pub(crate) fn shl(value: u64, shift: u32) -> u64 {
    value.checked_shl(shift).unwrap_or(0)
}

fn check_total_bits(bits: u32) -> Result<()> {
    if bits > HASH_BITS {
        return Err(GridError::GridOverflow { bits });
    }
    Ok(())
}

/// Cell layout of a Cartesian grid.
///
/// Cells are squares (cubes, ...) of side `cell_size` anchored at the lower
/// corner of the point set's bounding box. Dimension `d` uses `bits[d]` bits
/// of the hash, starting at bit `shifts[d]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianGeometry<const D: usize> {
    pub origin: [f64; D],
    pub cell_size: f64,
    pub bits: [u32; D],
    pub shifts: [u32; D],
}

impl<const D: usize> CartesianGeometry<D> {
    /// Size cells for the given extent.
    ///
    /// # Errors
    ///
    /// `InvalidRadius` for a non-positive radius, `DegenerateExtent` when the
    /// extent has zero width in some dimension, `GridOverflow` when the cells
    /// need more than 64 hash bits in total.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridhash::grid::CartesianGeometry;
    /// use gridhash::Extent;
    ///
    /// let extent = Extent::new([0.0, 0.0], [10.0, 3.0]);
    /// let geometry = CartesianGeometry::new(&extent, 1.0, 1e-8).unwrap();
    /// assert_eq!(geometry.bits, [4, 2]);
    /// assert_eq!(geometry.shifts, [0, 4]);
    /// ```
    pub fn new(extent: &Extent<D>, max_dist: f64, epsilon: f64) -> Result<Self> {
        validate_radius(max_dist)?;

        let mut bits = [0u32; D];
        let mut shifts = [0u32; D];
        let mut total = 0u32;
        for dimension in 0..D {
            let width = extent.width(dimension);
            // NaN widths fail this comparison too
            if !(width > 0.0) {
                return Err(GridError::DegenerateExtent { dimension });
            }
            bits[dimension] = bits_for(width / max_dist, epsilon);
            shifts[dimension] = total;
            total += bits[dimension];
        }
        check_total_bits(total)?;

        Ok(Self {
            origin: extent.min,
            cell_size: max_dist,
            bits,
            shifts,
        })
    }

    /// Size cells for the bounding box of `points`.
    pub fn from_points(points: &[[f64; D]], max_dist: f64, epsilon: f64) -> Result<Self> {
        validate_radius(max_dist)?;
        let extent = Extent::from_points(points).ok_or(GridError::EmptyPointSet)?;
        Self::new(&extent, max_dist, epsilon)
    }

    pub fn total_bits(&self) -> u32 {
        self.bits.iter().sum()
    }

    /// Largest valid cell coordinate in `dimension`.
    pub fn max_coord(&self, dimension: usize) -> u64 {
        mask(self.bits[dimension])
    }
}

/// Cell layout of a spherical grid.
///
/// Latitude is cut into bands `max_dist` high, counted outward from the
/// equator in each hemisphere. Each band splits longitude into its own number
/// of bins, wide enough to span `max_dist` along the band's poleward edge.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoGeometry {
    pub max_dist: f64,
    pub bits_lat: u32,
    pub bits_long: u32,
    /// Index of the last band that can hold points
    pub max_band: u64,
}

impl GeoGeometry {
    /// ```
    /// use gridhash::grid::GeoGeometry;
    ///
    /// let geometry = GeoGeometry::new(0.5, 1e-8).unwrap();
    /// assert_eq!(geometry.max_band, 3);
    /// assert_eq!(geometry.n_long(0), 11);
    /// assert_eq!(geometry.n_long(3), 1);
    /// ```
    pub fn new(max_dist: f64, epsilon: f64) -> Result<Self> {
        validate_radius(max_dist)?;

        let n_lines_lat = (PI / max_dist + epsilon).ceil();
        let n_lines_long = (TAU / max_dist + epsilon).ceil();
        let bits_lat = bits_for(n_lines_lat, 0.0);
        let bits_long = bits_for(n_lines_long, 0.0);
        check_total_bits(1 + bits_lat + bits_long)?;

        Ok(Self {
            max_dist,
            bits_lat,
            bits_long,
            max_band: (FRAC_PI_2 / max_dist).floor() as u64,
        })
    }

    pub fn total_bits(&self) -> u32 {
        1 + self.bits_lat + self.bits_long
    }

    /// Hemisphere bit (1 north, 0 south and equator) and band index of a latitude.
    pub fn band_of(&self, lat: f64) -> (u64, u64) {
        let sign = u64::from(lat > 0.0);
        let band = ((lat.abs() / self.max_dist).floor() as u64).min(self.max_band);
        (sign, band)
    }

    /// Number of longitude bins in `band`, from the circumference of the
    /// band's poleward edge. Always at least one.
    pub fn n_long(&self, band: u64) -> u64 {
        let circ = TAU * ((band + 1) as f64 * self.max_dist).cos();
        let n = (circ / self.max_dist).floor();
        if n >= 1.0 { n as u64 } else { 1 }
    }

    /// Angular width of one longitude bin in `band`.
    pub fn bin_width(&self, band: u64) -> f64 {
        TAU / self.n_long(band) as f64
    }

    /// Longitude bin of `lon` (radians in `[0, 2π)`) in a band of `n_long` bins.
    pub fn lon_bin(&self, lon: f64, n_long: u64) -> u64 {
        let width = TAU / n_long as f64;
        let bin = (lon / width).floor();
        if bin <= 0.0 {
            0
        } else {
            (bin as u64).min(n_long - 1)
        }
    }
}
