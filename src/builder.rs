//! Index builder for fluent configuration
//!
//! Collects the radius and build options, then builds whichever search
//! strategy the caller asks for.

use crate::config::Config;
use crate::error::Result;
use crate::search::NeighborSearch;

/// Builder for neighbor indexes.
///
/// # Examples
///
/// ```rust
/// use gridhash::{CartesianGrid, IndexBuilder, NeighborSearch};
///
/// let grid: CartesianGrid<2> = IndexBuilder::new(1.0)
///     .exclude_self(true)
///     .build(vec![[0.0, 0.0], [0.5, 0.5], [4.0, 4.0]])?;
///
/// assert_eq!(grid.find_neighbors(0)?.indices, vec![1]);
/// # Ok::<(), gridhash::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    config: Config,
}

impl IndexBuilder {
    /// Create a builder with the default configuration for radius `max_dist`.
    pub fn new(max_dist: f64) -> Self {
        Self {
            config: Config::new(max_dist),
        }
    }

    pub fn max_dist(mut self, max_dist: f64) -> Self {
        self.config.max_dist = max_dist;
        self
    }

    pub fn size_epsilon(mut self, epsilon: f64) -> Self {
        self.config.size_epsilon = epsilon;
        self
    }

    /// Drop each query point from its own neighbor list.
    pub fn exclude_self(mut self, exclude: bool) -> Self {
        self.config.exclude_self = exclude;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn current_config(&self) -> &Config {
        &self.config
    }

    /// Build an index of strategy `S` over `points`.
    pub fn build<S: NeighborSearch>(self, points: Vec<S::Point>) -> Result<S> {
        S::with_config(points, self.config)
    }
}

impl From<Config> for IndexBuilder {
    fn from(config: Config) -> Self {
        Self { config }
    }
}
