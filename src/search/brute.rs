//! Brute-force neighbor search.
//!
//! Compares the query point against every point. Too slow for anything but
//! small sets, but trivially correct, which makes it the reference the other
//! strategies are tested against.

use super::{NeighborSearch, check_point_id, filter_candidates};
use crate::compute::metric::{euclidean, great_circle};
use crate::compute::validation::{validate_cartesian, validate_geographic};
use crate::config::Config;
use crate::error::{GridError, Result};
use gridhash_types::{LatLon, NeighborResult};

/// Exhaustive Euclidean search. Every query examines all `n` points.
#[derive(Debug, Clone)]
pub struct BruteForce<const D: usize> {
    points: Vec<[f64; D]>,
    config: Config,
}

impl<const D: usize> NeighborSearch for BruteForce<D> {
    type Point = [f64; D];

    fn with_config(points: Vec<[f64; D]>, config: Config) -> Result<Self> {
        config.validate()?;
        if points.is_empty() {
            return Err(GridError::EmptyPointSet);
        }
        validate_cartesian(&points)?;
        Ok(Self { points, config })
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
        Ok(filter_candidates(point_id, 0..self.points.len(), &self.config, |j| {
            euclidean(query, &self.points[j])
        }))
    }
}

/// Exhaustive great-circle search.
#[derive(Debug, Clone)]
pub struct GeoBruteForce {
    points: Vec<LatLon>,
    config: Config,
}

impl NeighborSearch for GeoBruteForce {
    type Point = LatLon;

    fn with_config(points: Vec<LatLon>, config: Config) -> Result<Self> {
        config.validate()?;
        if points.is_empty() {
            return Err(GridError::EmptyPointSet);
        }
        validate_geographic(&points)?;
        let points = points.iter().map(LatLon::normalized).collect();
        Ok(Self { points, config })
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
        Ok(filter_candidates(point_id, 0..self.points.len(), &self.config, |j| {
            great_circle(query, self.points[j])
        }))
    }
}
