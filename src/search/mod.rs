//! Radius-neighbor search strategies.
//!
//! Every strategy answers the same question, "which points lie strictly
//! closer than `max_dist` to point `i`?", behind the [`NeighborSearch`]
//! trait, so a grid index, the brute-force oracle and an R*-tree can be
//! swapped for one another.
//!
//! | Strategy                          | Build      | Query (uniform density) |
//! |-----------------------------------|------------|-------------------------|
//! | [`CartesianGrid`] / [`GeoGrid`]   | O(n log n) | O(neighbors)            |
//! | [`BruteForce`] / [`GeoBruteForce`]| O(n)       | O(n)                    |
//! | [`CartesianRTree`] / [`GeoRTree`] | O(n log n) | O(log n + neighbors)    |

pub mod brute;
pub mod grid;
pub mod rtree;

pub use brute::{BruteForce, GeoBruteForce};
pub use grid::{CartesianGrid, GeoGrid};
pub use rtree::{CartesianRTree, GeoRTree};

use crate::config::Config;
use crate::error::{GridError, Result};
use gridhash_types::{NeighborResult, SearchStats};

/// A static point set answering radius-neighbor queries.
///
/// The radius is fixed when the index is built. Changing the points means
/// building a new index; [`rebuild`](Self::rebuild) and
/// [`update_values`](Self::update_values) do exactly that.
pub trait NeighborSearch: Sized {
    type Point: Copy;

    /// Build an index over `points`.
    fn with_config(points: Vec<Self::Point>, config: Config) -> Result<Self>;

    /// Build an index over `points` with the default configuration for
    /// radius `max_dist`.
    fn build(points: Vec<Self::Point>, max_dist: f64) -> Result<Self> {
        Self::with_config(points, Config::new(max_dist))
    }

    fn config(&self) -> &Config;

    /// The indexed points, in id order.
    fn points(&self) -> &[Self::Point];

    /// Ids of all points strictly closer than `max_dist` to point `point_id`,
    /// ascending, together with the number of candidates examined.
    fn find_neighbors(&self, point_id: usize) -> Result<NeighborResult>;

    fn max_dist(&self) -> f64 {
        self.config().max_dist
    }

    fn len(&self) -> usize {
        self.points().len()
    }

    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// A fresh index over `points` with this index's configuration.
    fn rebuild(&self, points: Vec<Self::Point>) -> Result<Self> {
        Self::with_config(points, self.config().clone())
    }

    /// Replace the point set, rebuilding everything. On error the index is
    /// left as it was.
    fn update_values(&mut self, points: Vec<Self::Point>) -> Result<()> {
        *self = self.rebuild(points)?;
        Ok(())
    }

    /// Neighbors of every point, in id order.
    fn find_all_neighbors(&self) -> Result<Vec<NeighborResult>> {
        (0..self.len()).map(|i| self.find_neighbors(i)).collect()
    }

    /// Neighbor and candidate totals over a query from every point.
    fn stats(&self) -> Result<SearchStats> {
        let mut stats = SearchStats::new();
        for i in 0..self.len() {
            stats.record(&self.find_neighbors(i)?);
        }
        Ok(stats)
    }
}

pub(crate) fn check_point_id(point_id: usize, len: usize) -> Result<()> {
    if point_id >= len {
        return Err(GridError::PointIndexOutOfRange {
            index: point_id,
            len,
        });
    }
    Ok(())
}

/// Runs the exact-distance filter over `candidates`.
///
/// Every candidate counts as examined, including the query point itself
/// when the configuration drops it from the result.
pub(crate) fn filter_candidates<I, F>(
    point_id: usize,
    candidates: I,
    config: &Config,
    distance: F,
) -> NeighborResult
where
    I: IntoIterator<Item = usize>,
    F: Fn(usize) -> f64,
{
    let mut examined = 0;
    let mut indices = Vec::new();
    for candidate in candidates {
        examined += 1;
        if config.exclude_self && candidate == point_id {
            continue;
        }
        if distance(candidate) < config.max_dist {
            indices.push(candidate);
        }
    }
    indices.sort_unstable();
    NeighborResult::new(indices, examined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_is_strict_and_sorted() {
        let config = Config::new(1.0);
        let distances = [0.0, 1.0, 0.5, 0.999, 2.0];
        let result = filter_candidates(0, [4, 3, 2, 1, 0], &config, |i| distances[i]);
        assert_eq!(result.indices, vec![0, 2, 3]);
        assert_eq!(result.candidates_examined, 5);
    }

    #[test]
    fn test_filter_exclude_self_still_counts() {
        let config = Config::new(1.0).with_exclude_self(true);
        let result = filter_candidates(2, [1, 2], &config, |_| 0.0);
        assert_eq!(result.indices, vec![1]);
        assert_eq!(result.candidates_examined, 2);
    }

    #[test]
    fn test_check_point_id() {
        assert!(check_point_id(2, 3).is_ok());
        assert_eq!(
            check_point_id(3, 3),
            Err(GridError::PointIndexOutOfRange { index: 3, len: 3 })
        );
    }
}
