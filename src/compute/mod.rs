//! Distance metrics and input validation.

pub mod metric;
pub mod validation;

pub use metric::{euclidean, great_circle};
