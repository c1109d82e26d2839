//! R*-tree neighbor search.
//!
//! A balanced-tree alternative to the grid, backed by `rstar`. The tree only
//! proposes candidates; the exact metric has the final say, so results match
//! the other strategies point for point.

use super::{NeighborSearch, check_point_id, filter_candidates};
use crate::compute::metric::{euclidean, great_circle};
use crate::compute::validation::{validate_cartesian, validate_geographic};
use crate::config::Config;
use crate::error::{GridError, Result};
use gridhash_types::{LatLon, NeighborResult};
use rstar::{Point as RstarPoint, RTree};
use std::f64::consts::FRAC_PI_2;

/// Relative slack on the tree's search radius so rounding in its squared
/// distances cannot drop a point the exact metric would keep.
const RADIUS_SLACK: f64 = 1e-9;

/// Point stored in the R*-tree, tagged with its id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedPoint<const D: usize> {
    pub coords: [f64; D],
    pub id: usize,
}

impl<const D: usize> IndexedPoint<D> {
    pub fn new(coords: [f64; D], id: usize) -> Self {
        Self { coords, id }
    }
}

impl<const D: usize> RstarPoint for IndexedPoint<D> {
    type Scalar = f64;
    const DIMENSIONS: usize = D;

    fn generate(mut generator: impl FnMut(usize) -> Self::Scalar) -> Self {
        let mut coords = [0.0; D];
        for (i, coord) in coords.iter_mut().enumerate() {
            *coord = generator(i);
        }
        Self { coords, id: 0 }
    }

    fn nth(&self, index: usize) -> Self::Scalar {
        self.coords[index]
    }

    fn nth_mut(&mut self, index: usize) -> &mut Self::Scalar {
        &mut self.coords[index]
    }
}

fn bulk_load<const D: usize>(coords: impl Iterator<Item = [f64; D]>) -> RTree<IndexedPoint<D>> {
    RTree::bulk_load(
        coords
            .enumerate()
            .map(|(id, c)| IndexedPoint::new(c, id))
            .collect(),
    )
}

fn squared_radius(radius: f64) -> f64 {
    let r = radius * (1.0 + RADIUS_SLACK);
    r * r
}

/// Euclidean search over an R*-tree of the raw coordinates.
#[derive(Debug, Clone)]
pub struct CartesianRTree<const D: usize> {
    points: Vec<[f64; D]>,
    config: Config,
    tree: RTree<IndexedPoint<D>>,
}

impl<const D: usize> NeighborSearch for CartesianRTree<D> {
    type Point = [f64; D];

    fn with_config(points: Vec<[f64; D]>, config: Config) -> Result<Self> {
        config.validate()?;
        if points.is_empty() {
            return Err(GridError::EmptyPointSet);
        }
        validate_cartesian(&points)?;

        let tree = bulk_load(points.iter().copied());
        log::debug!("bulk loaded {}D R*-tree with {} points", D, tree.size());
        Ok(Self { points, config, tree })
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

        let candidates = self
            .tree
            .locate_within_distance(
                IndexedPoint::new(*query, point_id),
                squared_radius(self.config.max_dist),
            )
            .map(|p| p.id);

        Ok(filter_candidates(point_id, candidates, &self.config, |j| {
            euclidean(query, &self.points[j])
        }))
    }
}

/// Great-circle search over an R*-tree of unit vectors.
///
/// Two points on the unit sphere an angle θ apart are a chord of
/// `2·sin(θ/2)` apart, which grows with θ up to π, so a ball query of that
/// chord length finds every point within the angular radius.
#[derive(Debug, Clone)]
pub struct GeoRTree {
    points: Vec<LatLon>,
    config: Config,
    tree: RTree<IndexedPoint<3>>,
}

impl NeighborSearch for GeoRTree {
    type Point = LatLon;

    fn with_config(points: Vec<LatLon>, config: Config) -> Result<Self> {
        config.validate()?;
        if points.is_empty() {
            return Err(GridError::EmptyPointSet);
        }
        validate_geographic(&points)?;

        let points: Vec<LatLon> = points.iter().map(LatLon::normalized).collect();
        let tree = bulk_load(points.iter().map(LatLon::to_unit_vector));
        log::debug!("bulk loaded unit-sphere R*-tree with {} points", tree.size());
        Ok(Self { points, config, tree })
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

        let chord = 2.0 * (self.config.max_dist / 2.0).min(FRAC_PI_2).sin();
        let candidates = self
            .tree
            .locate_within_distance(
                IndexedPoint::new(query.to_unit_vector(), point_id),
                squared_radius(chord),
            )
            .map(|p| p.id);

        Ok(filter_candidates(point_id, candidates, &self.config, |j| {
            great_circle(query, self.points[j])
        }))
    }
}
