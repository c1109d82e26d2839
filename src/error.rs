//! Error types for building and querying neighbor indexes.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

/// Everything that can go wrong while building or querying an index.
///
/// Errors are reported at build or query entry. A failed build never leaves a
/// partially constructed index behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("max_dist must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("point set is empty")]
    EmptyPointSet,

    #[error("point index {index} out of range for {len} points")]
    PointIndexOutOfRange { index: usize, len: usize },

    #[error("bounding box has zero width in dimension {dimension}")]
    DegenerateExtent { dimension: usize },

    #[error("invalid coordinate for point {index}: {reason}")]
    InvalidCoordinate { index: usize, reason: String },

    #[error("grid needs {bits} hash bits but a cell hash holds 64")]
    GridOverflow { bits: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GridError::PointIndexOutOfRange { index: 7, len: 3 }.to_string(),
            "point index 7 out of range for 3 points"
        );
        assert_eq!(
            GridError::DegenerateExtent { dimension: 1 }.to_string(),
            "bounding box has zero width in dimension 1"
        );
        assert!(GridError::InvalidRadius(-1.0).to_string().contains("-1"));
    }
}
