//! Cartesian cell hashing.
//!
//! A point's integer cell coordinates are packed side by side into one
//! [`CellHash`]: dimension 0 in the low bits, each later dimension shifted
//! past the bits of the ones before it.

use super::CellHash;
use super::sizing::{CartesianGeometry, shl};
use smallvec::SmallVec;

/// Neighbor cell list; inline for the 9 cells of a 2D neighborhood.
pub type CellNeighbors = SmallVec<[CellHash; 9]>;

/// All `3^D` offset vectors with components in `{-1, 0, +1}`.
fn neighbor_offsets<const D: usize>() -> Vec<[i8; D]> {
    let count = 3usize.pow(D as u32);
    (0..count)
        .map(|k| {
            let mut offset = [0i8; D];
            let mut divider = 1;
            for component in offset.iter_mut() {
                *component = 1 - ((k / divider) % 3) as i8;
                divider *= 3;
            }
            offset
        })
        .collect()
}

/// Maps points to cells of a [`CartesianGeometry`] and enumerates the cells
/// around a given cell.
#[derive(Debug, Clone)]
pub struct CartesianHasher<const D: usize> {
    geometry: CartesianGeometry<D>,
    offsets: Vec<[i8; D]>,
}

impl<const D: usize> CartesianHasher<D> {
    pub fn new(geometry: CartesianGeometry<D>) -> Self {
        Self {
            geometry,
            offsets: neighbor_offsets::<D>(),
        }
    }

    pub fn geometry(&self) -> &CartesianGeometry<D> {
        &self.geometry
    }

    /// Integer cell coordinates of a point, clamped onto the grid.
    pub fn cell_coords(&self, point: &[f64; D]) -> [u64; D] {
        let mut coords = [0u64; D];
        for (d, coord) in coords.iter_mut().enumerate() {
            let cell = ((point[d] - self.geometry.origin[d]) / self.geometry.cell_size).floor();
            *coord = if cell <= 0.0 {
                0
            } else {
                (cell as u64).min(self.geometry.max_coord(d))
            };
        }
        coords
    }

    pub fn pack(&self, coords: &[u64; D]) -> CellHash {
        coords
            .iter()
            .zip(self.geometry.shifts.iter())
            .fold(0, |hash, (&c, &shift)| hash | shl(c, shift))
    }

    pub fn unpack(&self, hash: CellHash) -> [u64; D] {
        let mut coords = [0u64; D];
        for (d, coord) in coords.iter_mut().enumerate() {
            *coord = hash.checked_shr(self.geometry.shifts[d]).unwrap_or(0) & self.geometry.max_coord(d);
        }
        coords
    }

    /// Cell hash of a point.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridhash::grid::{CartesianGeometry, CartesianHasher};
    /// use gridhash::Extent;
    ///
    /// let extent = Extent::new([0.0, 0.0], [10.0, 10.0]);
    /// let hasher = CartesianHasher::new(CartesianGeometry::new(&extent, 1.0, 1e-8).unwrap());
    /// // cell (3, 2) with 4 bits for x
    /// assert_eq!(hasher.hash(&[3.5, 2.1]), 3 | (2 << 4));
    /// ```
    pub fn hash(&self, point: &[f64; D]) -> CellHash {
        self.pack(&self.cell_coords(point))
    }

    /// Hashes of the cell and all cells touching it, skipping those that
    /// would fall off the grid. The grid edge does not wrap.
    pub fn neighbors(&self, hash: CellHash) -> CellNeighbors {
        let coords = self.unpack(hash);
        let mut cells = CellNeighbors::new();
        'offsets: for offset in &self.offsets {
            let mut shifted = [0u64; D];
            for d in 0..D {
                let c = coords[d] as i128 + i128::from(offset[d]);
                if c < 0 || c > i128::from(self.geometry.max_coord(d)) {
                    continue 'offsets;
                }
                shifted[d] = c as u64;
            }
            cells.push(self.pack(&shifted));
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridhash_types::Extent;
    use std::collections::HashSet;

    fn hasher_2d(max: [f64; 2], max_dist: f64) -> CartesianHasher<2> {
        let extent = Extent::new([0.0, 0.0], max);
        CartesianHasher::new(CartesianGeometry::new(&extent, max_dist, 1e-8).unwrap())
    }

    #[test]
    fn test_offsets_cover_moore_neighborhood() {
        let offsets = neighbor_offsets::<2>();
        assert_eq!(offsets.len(), 9);
        let unique: HashSet<_> = offsets.iter().collect();
        assert_eq!(unique.len(), 9);
        assert!(offsets.contains(&[0, 0]));
        assert_eq!(neighbor_offsets::<3>().len(), 27);
    }

    #[test]
    fn test_pack_unpack() {
        let hasher = hasher_2d([10.0, 10.0], 1.0);
        let hash = hasher.pack(&[5, 9]);
        assert_eq!(hasher.unpack(hash), [5, 9]);
    }

    #[test]
    fn test_hash_is_deterministic_and_groups_cells() {
        let hasher = hasher_2d([10.0, 10.0], 1.0);
        assert_eq!(hasher.hash(&[2.2, 7.9]), hasher.hash(&[2.2, 7.9]));
        assert_eq!(hasher.hash(&[2.2, 7.9]), hasher.hash(&[2.9, 7.0]));
        assert_ne!(hasher.hash(&[2.2, 7.9]), hasher.hash(&[3.0, 7.9]));
    }

    #[test]
    fn test_interior_cell_has_nine_neighbors() {
        let hasher = hasher_2d([10.0, 10.0], 1.0);
        let neighbors = hasher.neighbors(hasher.pack(&[4, 4]));
        assert_eq!(neighbors.len(), 9);
        let coords: HashSet<[u64; 2]> = neighbors.iter().map(|&h| hasher.unpack(h)).collect();
        for x in 3..=5 {
            for y in 3..=5 {
                assert!(coords.contains(&[x, y]));
            }
        }
    }

    #[test]
    fn test_grid_edge_is_hard() {
        let hasher = hasher_2d([10.0, 10.0], 1.0);
        assert_eq!(hasher.neighbors(hasher.pack(&[0, 0])).len(), 4);
        // 4 bits per axis: coordinate 15 is the last valid one
        assert_eq!(hasher.neighbors(hasher.pack(&[15, 15])).len(), 4);
        assert_eq!(hasher.neighbors(hasher.pack(&[0, 7])).len(), 6);
    }

    #[test]
    fn test_zero_bit_dimension() {
        // x spans less than one cell so it uses no bits at all
        let hasher = hasher_2d([0.5, 10.0], 1.0);
        assert_eq!(hasher.geometry().bits[0], 0);
        let hash = hasher.hash(&[0.4, 3.5]);
        assert_eq!(hasher.unpack(hash), [0, 3]);
        assert_eq!(hasher.neighbors(hash).len(), 3);
    }

    #[test]
    fn test_three_dimensions() {
        let extent = Extent::new([-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]);
        let hasher = CartesianHasher::new(CartesianGeometry::new(&extent, 0.5, 1e-8).unwrap());
        let hash = hasher.hash(&[0.1, -0.6, 0.9]);
        assert_eq!(hasher.unpack(hash), [2, 0, 3]);
        assert_eq!(hasher.neighbors(hash).len(), 27 - 9);
    }
}
