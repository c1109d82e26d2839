//! Grid-hash spatial partitioning.
//!
//! Space is cut into cells at least `max_dist` wide in every direction, so
//! every neighbor of a point lies in the point's own cell or one of a small,
//! enumerable set of adjacent cells. Each cell is addressed by a single
//! integer [`CellHash`].
//!
//! ```text
//! sizing      bit-widths / band counts from max_dist and extent
//! cartesian   bit-packed cell hash + 3^D neighborhood
//! geographic  latitude-band / longitude-bin hash + band-aware neighborhood
//! bucket      CellHash -> point ids, built once
//! ```

pub mod bucket;
pub mod cartesian;
pub mod geographic;
pub mod sizing;

/// Integer address of one grid cell.
pub type CellHash = u64;

pub use bucket::BucketIndex;
pub use cartesian::CartesianHasher;
pub use geographic::GeoHasher;
pub use sizing::{CartesianGeometry, GeoGeometry};
