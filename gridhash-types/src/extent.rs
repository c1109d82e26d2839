use geo::Rect;

/// Axis-aligned bounding box of a `D`-dimensional point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent<const D: usize> {
    pub min: [f64; D],
    pub max: [f64; D],
}

impl<const D: usize> Extent<D> {
    pub fn new(min: [f64; D], max: [f64; D]) -> Self {
        Self { min, max }
    }

    /// Smallest extent covering every point, or `None` for an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridhash_types::Extent;
    ///
    /// let extent = Extent::from_points(&[[0.0, 3.0], [2.0, -1.0]]).unwrap();
    /// assert_eq!(extent.min, [0.0, -1.0]);
    /// assert_eq!(extent.max, [2.0, 3.0]);
    /// ```
    pub fn from_points(points: &[[f64; D]]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut extent = Self::new(*first, *first);
        for point in rest {
            for d in 0..D {
                extent.min[d] = extent.min[d].min(point[d]);
                extent.max[d] = extent.max[d].max(point[d]);
            }
        }
        Some(extent)
    }

    pub fn width(&self, dim: usize) -> f64 {
        self.max[dim] - self.min[dim]
    }

    pub fn contains(&self, point: &[f64; D]) -> bool {
        (0..D).all(|d| self.min[d] <= point[d] && point[d] <= self.max[d])
    }
}

impl From<Rect<f64>> for Extent<2> {
    fn from(rect: Rect<f64>) -> Self {
        Self::new([rect.min().x, rect.min().y], [rect.max().x, rect.max().y])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn test_empty_has_no_extent() {
        assert!(Extent::<2>::from_points(&[]).is_none());
    }

    #[test]
    fn test_single_point_has_zero_width() {
        let extent = Extent::from_points(&[[1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(extent.width(0), 0.0);
        assert_eq!(extent.width(2), 0.0);
        assert!(extent.contains(&[1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_from_rect() {
        let rect = Rect::new(coord! { x: 4.0, y: -1.0 }, coord! { x: 0.0, y: 1.0 });
        let extent = Extent::from(rect);
        assert_eq!(extent.min, [0.0, -1.0]);
        assert_eq!(extent.max, [4.0, 1.0]);
        assert_eq!(extent.width(0), 4.0);
    }
}
