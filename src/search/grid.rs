//! Grid-hash neighbor indexes.
//!
//! Build hashes every point into its cell and groups ids into buckets. A
//! query looks up the query point's cached cell, enumerates the cells around
//! it, and runs the exact-distance filter over whatever those buckets hold.
//! Cells are never narrower than `max_dist`, so the buckets visited always
//! contain every true neighbor.

use super::{NeighborSearch, check_point_id, filter_candidates};
use crate::compute::metric::{euclidean, great_circle};
use crate::compute::validation::{validate_cartesian, validate_geographic};
use crate::config::Config;
use crate::error::{GridError, Result};
use crate::grid::{BucketIndex, CartesianGeometry, CartesianHasher, CellHash, GeoGeometry, GeoHasher};
use gridhash_types::{LatLon, NeighborResult};
use std::f64::consts::PI;

fn warn_if_collapsed(kind: &str, points: usize, buckets: &BucketIndex) {
    if points > 1 && buckets.cell_count() == 1 {
        log::warn!(
            "{} grid put all {} points in a single cell; queries will scan every point",
            kind,
            points
        );
    }
}

/// Grid-hash index over points in `D`-dimensional Euclidean space.
///
/// # Examples
///
/// ```rust
/// use gridhash::{CartesianGrid, NeighborSearch};
///
/// let points = vec![[0.0, 0.0], [0.5, 0.0], [3.0, 3.0]];
/// let grid = CartesianGrid::build(points, 1.0)?;
///
/// let result = grid.find_neighbors(0)?;
/// assert_eq!(result.indices, vec![0, 1]);
/// # Ok::<(), gridhash::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CartesianGrid<const D: usize> {
    points: Vec<[f64; D]>,
    config: Config,
    hasher: CartesianHasher<D>,
    hashes: Vec<CellHash>,
    buckets: BucketIndex,
}

impl<const D: usize> CartesianGrid<D> {
    pub fn hasher(&self) -> &CartesianHasher<D> {
        &self.hasher
    }

    pub fn buckets(&self) -> &BucketIndex {
        &self.buckets
    }

    /// Cell hash of every point, in id order.
    pub fn hashes(&self) -> &[CellHash] {
        &self.hashes
    }

    pub fn cell_hash(&self, point_id: usize) -> Result<CellHash> {
        check_point_id(point_id, self.points.len())?;
        Ok(self.hashes[point_id])
    }
}

impl<const D: usize> NeighborSearch for CartesianGrid<D> {
    type Point = [f64; D];

    fn with_config(points: Vec<[f64; D]>, config: Config) -> Result<Self> {
        config.validate()?;
        if points.is_empty() {
            return Err(GridError::EmptyPointSet);
        }
        validate_cartesian(&points)?;

        let geometry = CartesianGeometry::from_points(&points, config.max_dist, config.size_epsilon)?;
        let hasher = CartesianHasher::new(geometry);
        let hashes: Vec<CellHash> = points.iter().map(|p| hasher.hash(p)).collect();
        let buckets = BucketIndex::from_hashes(&hashes);

        log::debug!(
            "built {}D cartesian grid: {} points in {} cells, bits {:?}",
            D,
            points.len(),
            buckets.cell_count(),
            hasher.geometry().bits
        );
        warn_if_collapsed("cartesian", points.len(), &buckets);

        Ok(Self {
            points,
            config,
            hasher,
            hashes,
            buckets,
        })
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn points(&self) -> &[[f64; D]] {
        &self.points
    }

    fn find_neighbors(&self, point_id: usize) -> Result<NeighborResult> {
        check_point_id(point_id, self.points.len())?;
        let query = &self.points[point_id];

        let cells = self.hasher.neighbors(self.hashes[point_id]);
        let candidates = cells
            .iter()
            .flat_map(|&cell| self.buckets.get(cell).iter().copied());

        Ok(filter_candidates(point_id, candidates, &self.config, |j| {
            euclidean(query, &self.points[j])
        }))
    }
}

/// Grid-hash index over points on the unit sphere, by great-circle distance.
///
/// Longitudes are wrapped into `[0, 2π)` when the index is built, so
/// [`points`](NeighborSearch::points) returns the normalized coordinates.
///
/// # Examples
///
/// ```rust
/// use gridhash::{GeoGrid, LatLon, NeighborSearch};
///
/// let points = vec![
///     LatLon::from_degrees(40.7128, -74.0060), // New York
///     LatLon::from_degrees(40.6782, -73.9442), // Brooklyn
///     LatLon::from_degrees(34.0522, -118.2437), // Los Angeles
/// ];
/// // ~64 km on the Earth
/// let grid = GeoGrid::build(points, 0.01)?;
///
/// let result = grid.find_neighbors(0)?;
/// assert_eq!(result.indices, vec![0, 1]);
/// # Ok::<(), gridhash::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeoGrid {
    points: Vec<LatLon>,
    config: Config,
    hasher: GeoHasher,
    hashes: Vec<CellHash>,
    buckets: BucketIndex,
}

impl GeoGrid {
    pub fn hasher(&self) -> &GeoHasher {
        &self.hasher
    }

    pub fn buckets(&self) -> &BucketIndex {
        &self.buckets
    }

    pub fn hashes(&self) -> &[CellHash] {
        &self.hashes
    }

    pub fn cell_hash(&self, point_id: usize) -> Result<CellHash> {
        check_point_id(point_id, self.points.len())?;
        Ok(self.hashes[point_id])
    }
}

impl NeighborSearch for GeoGrid {
    type Point = LatLon;

    fn with_config(points: Vec<LatLon>, config: Config) -> Result<Self> {
        config.validate()?;
        if points.is_empty() {
            return Err(GridError::EmptyPointSet);
        }
        validate_geographic(&points)?;

        if config.max_dist >= PI {
            log::warn!(
                "max_dist {} spans the whole sphere; every point neighbors every other",
                config.max_dist
            );
        }

        let points: Vec<LatLon> = points.iter().map(LatLon::normalized).collect();
        let hasher = GeoHasher::new(GeoGeometry::new(config.max_dist, config.size_epsilon)?);
        let hashes: Vec<CellHash> = points.iter().map(|p| hasher.hash(p)).collect();
        let buckets = BucketIndex::from_hashes(&hashes);

        log::debug!(
            "built geographic grid: {} points in {} cells, {} bands per hemisphere, bits (lat {}, long {})",
            points.len(),
            buckets.cell_count(),
            hasher.geometry().max_band + 1,
            hasher.geometry().bits_lat,
            hasher.geometry().bits_long
        );
        warn_if_collapsed("geographic", points.len(), &buckets);

        Ok(Self {
            points,
            config,
            hasher,
            hashes,
            buckets,
        })
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn points(&self) -> &[LatLon] {
        &self.points
    }

    fn find_neighbors(&self, point_id: usize) -> Result<NeighborResult> {
        check_point_id(point_id, self.points.len())?;
        let query = self.points[point_id];

        let cells = self.hasher.neighbors(self.hashes[point_id], &query);
        let candidates = cells
            .iter()
            .flat_map(|&cell| self.buckets.get(cell).iter().copied());

        Ok(filter_candidates(point_id, candidates, &self.config, |j| {
            great_circle(query, self.points[j])
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn test_cartesian_boundary_pairs() {
        let points = vec![[0.0, 0.0], [0.99, 0.0], [1.01, 0.0], [4.0, 4.0]];
        let grid = CartesianGrid::build(points, 1.0).unwrap();

        let first = grid.find_neighbors(0).unwrap();
        assert!(first.contains(1));
        assert!(!first.contains(2));
        assert!(grid.find_neighbors(1).unwrap().contains(0));
        assert!(!grid.find_neighbors(2).unwrap().contains(0));
    }

    #[test]
    fn test_cartesian_errors() {
        assert_eq!(
            CartesianGrid::<2>::build(vec![], 1.0).unwrap_err(),
            GridError::EmptyPointSet
        );
        assert_eq!(
            CartesianGrid::build(vec![[0.0, 0.0], [1.0, 1.0]], 0.0).unwrap_err(),
            GridError::InvalidRadius(0.0)
        );
        assert_eq!(
            CartesianGrid::build(vec![[0.0, 1.0], [2.0, 1.0]], 1.0).unwrap_err(),
            GridError::DegenerateExtent { dimension: 1 }
        );

        let grid = CartesianGrid::build(vec![[0.0, 0.0], [1.0, 1.0]], 1.0).unwrap();
        assert_eq!(
            grid.find_neighbors(2).unwrap_err(),
            GridError::PointIndexOutOfRange { index: 2, len: 2 }
        );
        assert!(grid.cell_hash(5).is_err());
    }

    #[test]
    fn test_cartesian_candidates_include_own_cell() {
        let points = vec![[0.1, 0.1], [0.2, 0.2], [0.7, 0.7], [5.0, 5.0]];
        let grid = CartesianGrid::build(points, 1.0).unwrap();
        let result = grid.find_neighbors(0).unwrap();
        assert_eq!(result.indices, vec![0, 1, 2]);
        assert!(result.candidates_examined >= 3);
        assert!(result.candidates_examined < 4);
    }

    #[test]
    fn test_cartesian_exclude_self() {
        let config = Config::new(1.0).with_exclude_self(true);
        let grid = CartesianGrid::with_config(vec![[0.0, 0.0], [0.5, 0.5]], config).unwrap();
        let result = grid.find_neighbors(0).unwrap();
        assert_eq!(result.indices, vec![1]);
        assert_eq!(result.candidates_examined, 2);
    }

    #[test]
    fn test_cartesian_hash_ignores_point_order() {
        let points = vec![[0.3, 4.2], [7.7, 1.1], [2.5, 2.5], [9.9, 9.9], [0.0, 0.0]];
        let grid = CartesianGrid::build(points.clone(), 0.75).unwrap();
        let mut reversed = points.clone();
        reversed.reverse();
        let other = CartesianGrid::build(reversed, 0.75).unwrap();

        let n = points.len();
        for i in 0..n {
            assert_eq!(grid.hashes()[i], other.hashes()[n - 1 - i]);
        }
    }

    #[test]
    fn test_update_values_rebuilds() {
        let mut grid = CartesianGrid::build(vec![[0.0, 0.0], [5.0, 5.0]], 1.0).unwrap();
        assert_eq!(grid.find_neighbors(0).unwrap().indices, vec![0]);

        grid.update_values(vec![[0.0, 0.0], [0.5, 0.0], [3.0, 3.0]]).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.find_neighbors(0).unwrap().indices, vec![0, 1]);

        // failed rebuilds leave the index untouched
        assert!(grid.update_values(vec![]).is_err());
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.find_neighbors(1).unwrap().indices, vec![0, 1]);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let points: Vec<[f64; 2]> = (0..200)
            .map(|i| [(i * 37 % 101) as f64 * 0.1, (i * 53 % 97) as f64 * 0.1])
            .collect();
        let grid = CartesianGrid::build(points.clone(), 0.8).unwrap();
        let again = grid.rebuild(points).unwrap();

        let as_sets = |g: &CartesianGrid<2>| -> HashSet<(CellHash, Vec<usize>)> {
            g.buckets().iter().map(|(h, ids)| (h, ids.to_vec())).collect()
        };
        assert_eq!(as_sets(&grid), as_sets(&again));
        assert_eq!(grid.find_all_neighbors().unwrap(), again.find_all_neighbors().unwrap());
    }

    #[test]
    fn test_geo_longitude_wrap_pair() {
        let points = vec![LatLon::new(0.3, 0.01), LatLon::new(0.3, TAU - 0.01)];
        let grid = GeoGrid::build(points, 0.05).unwrap();
        assert_eq!(grid.find_neighbors(0).unwrap().indices, vec![0, 1]);
        assert_eq!(grid.find_neighbors(1).unwrap().indices, vec![0, 1]);
    }

    #[test]
    fn test_geo_across_pole() {
        // same latitude, opposite meridians: 0.02 rad apart over the pole
        let points = vec![
            LatLon::new(FRAC_PI_2 - 0.01, 0.5),
            LatLon::new(FRAC_PI_2 - 0.01, 0.5 + PI),
        ];
        let grid = GeoGrid::build(points, 0.05).unwrap();
        assert_eq!(grid.find_neighbors(0).unwrap().indices, vec![0, 1]);
    }

    #[test]
    fn test_geo_across_equator() {
        let points = vec![LatLon::new(0.01, 2.0), LatLon::new(-0.01, 2.0), LatLon::new(0.0, 2.0)];
        let grid = GeoGrid::build(points, 0.05).unwrap();
        assert_eq!(grid.find_neighbors(0).unwrap().indices, vec![0, 1, 2]);
        assert_ne!(grid.hashes()[0] & 1, grid.hashes()[1] & 1);
    }

    #[test]
    fn test_geo_normalizes_longitude() {
        let grid = GeoGrid::build(vec![LatLon::new(0.0, -0.5), LatLon::new(0.0, TAU - 0.5)], 0.1).unwrap();
        assert_eq!(grid.points()[0], grid.points()[1]);
        assert_eq!(grid.hashes()[0], grid.hashes()[1]);
    }

    #[test]
    fn test_geo_errors() {
        assert_eq!(GeoGrid::build(vec![], 0.1).unwrap_err(), GridError::EmptyPointSet);
        assert_eq!(
            GeoGrid::build(vec![LatLon::new(0.0, 0.0)], -0.1).unwrap_err(),
            GridError::InvalidRadius(-0.1)
        );
        assert!(matches!(
            GeoGrid::build(vec![LatLon::new(0.0, 0.0), LatLon::new(2.0, 0.0)], 0.1),
            Err(GridError::InvalidCoordinate { index: 1, .. })
        ));
    }
}
