//! # gridhash-types
//!
//! Plain data types shared by the `gridhash` neighbor index:
//!
//! - **Points**: `LatLon` for spherical coordinates in radians. Cartesian
//!   points are bare `[f64; D]` arrays.
//! - **Extents**: `Extent<D>`, the axis-aligned bounding box of a point set
//! - **Results**: `NeighborResult` and the aggregate `SearchStats`
//!
//! ## Examples
//!
//! ```rust
//! use gridhash_types::point::LatLon;
//! use geo::Point;
//!
//! let nyc = LatLon::from(Point::new(-74.0060, 40.7128));
//! assert!((nyc.lat().to_degrees() - 40.7128).abs() < 1e-12);
//! ```

pub mod extent;
pub mod neighbors;
pub mod point;

pub use extent::Extent;
pub use neighbors::{NeighborResult, SearchStats};
pub use point::LatLon;
