//! Grid-hash spatial index for radius-neighbor queries.
//!
//! Answers "which points lie closer than `max_dist` to point `i`?" over a
//! static point set, either in the plane (Euclidean distance) or on the
//! sphere (great-circle distance), without scanning every pair.
//!
//! Space is cut into cells at least `max_dist` wide and each point is hashed
//! to its cell. A query only looks at the points in its own cell and the
//! cells around it, then keeps those within range.
//!
//! ```rust
//! use gridhash::{CartesianGrid, GeoGrid, LatLon, NeighborSearch};
//!
//! let plane = CartesianGrid::build(vec![[0.0, 0.0], [0.99, 0.0], [1.01, 0.0], [2.0, 2.0]], 1.0)?;
//! assert_eq!(plane.find_neighbors(0)?.indices, vec![0, 1]);
//!
//! let sphere = GeoGrid::build(vec![LatLon::new(0.3, 0.01), LatLon::new(0.3, 6.27)], 0.05)?;
//! assert_eq!(sphere.find_neighbors(0)?.indices, vec![0, 1]);
//! # Ok::<(), gridhash::GridError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod grid;
pub mod search;

pub use builder::IndexBuilder;
pub use config::Config;
pub use error::{GridError, Result};

pub use grid::CellHash;
pub use search::{
    BruteForce, CartesianGrid, CartesianRTree, GeoBruteForce, GeoGrid, GeoRTree, NeighborSearch,
};

pub use gridhash_types::{Extent, LatLon, NeighborResult, SearchStats};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, GridError, IndexBuilder, Result};

    pub use crate::{CartesianGrid, GeoGrid, NeighborSearch};

    pub use crate::{BruteForce, CartesianRTree, GeoBruteForce, GeoRTree};

    pub use crate::{LatLon, NeighborResult, SearchStats};
}
