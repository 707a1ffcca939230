//! Closed planar polygons.

use millprep_core::Vector2d;
use serde::{Deserialize, Serialize};

/// A closed ring of points in the XY plane.
///
/// The closing edge from the last point back to the first is implicit; the
/// first point is not repeated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon2D {
    pub points: Vec<Vector2d>,
}

/// Ordered list of polygons, outer rings and holes mixed.
pub type PolygonSet = Vec<Polygon2D>;

impl Polygon2D {
    pub fn new(points: Vec<Vector2d>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area by the shoelace formula.
    ///
    /// Positive for counter-clockwise rings, negative for clockwise ones,
    /// 0.0 with fewer than three points.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let next = self.points.iter().cycle().skip(1);
        let twice: f64 = self
            .points
            .iter()
            .zip(next)
            .map(|(a, b)| a.cross(b))
            .sum();
        twice * 0.5
    }

    /// True when the ring winds clockwise. Zero-area rings are not clockwise.
    pub fn is_clockwise(&self) -> bool {
        self.area() < 0.0
    }

    /// Holes are clockwise rings.
    pub fn is_hole(&self) -> bool {
        self.is_clockwise()
    }

    /// Same ring with opposite winding.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Axis-aligned (min, max) corners, `None` for an empty polygon.
    pub fn bounds(&self) -> Option<(Vector2d, Vector2d)> {
        let (first, rest) = self.points.split_first()?;
        Some(
            rest.iter()
                .fold((*first, *first), |(min, max), p| (min.min(p), max.max(p))),
        )
    }
}

impl From<Vec<Vector2d>> for Polygon2D {
    fn from(points: Vec<Vector2d>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Polygon2D {
        Polygon2D::new(vec![
            Vector2d::new(0.0, 0.0),
            Vector2d::new(size, 0.0),
            Vector2d::new(size, size),
            Vector2d::new(0.0, size),
        ])
    }

    #[test]
    fn test_ccw_square_area() {
        let poly = square(10.0);
        assert!((poly.area() - 100.0).abs() < 1e-12);
        assert!(!poly.is_clockwise());
        assert!(!poly.is_hole());
    }

    #[test]
    fn test_cw_square_is_hole() {
        let poly = square(10.0).reversed();
        assert!((poly.area() + 100.0).abs() < 1e-12);
        assert!(poly.is_clockwise());
        assert!(poly.is_hole());
    }

    #[test]
    fn test_fewer_than_three_points() {
        assert_eq!(Polygon2D::default().area(), 0.0);
        let segment = Polygon2D::new(vec![Vector2d::new(0.0, 0.0), Vector2d::new(5.0, 5.0)]);
        assert_eq!(segment.area(), 0.0);
        assert!(!segment.is_hole());
    }

    #[test]
    fn test_collinear_ring_is_neither() {
        let line = Polygon2D::new(vec![
            Vector2d::new(0.0, 0.0),
            Vector2d::new(1.0, 1.0),
            Vector2d::new(2.0, 2.0),
        ]);
        assert_eq!(line.area(), 0.0);
        assert!(!line.is_clockwise());
        assert!(!line.is_hole());
    }

    #[test]
    fn test_triangle_area() {
        let tri = Polygon2D::from(vec![
            Vector2d::new(0.0, 0.0),
            Vector2d::new(4.0, 0.0),
            Vector2d::new(0.0, 3.0),
        ]);
        assert!((tri.area() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounds() {
        assert!(Polygon2D::default().bounds().is_none());
        let poly = Polygon2D::new(vec![
            Vector2d::new(-1.0, 2.0),
            Vector2d::new(3.0, -4.0),
            Vector2d::new(0.5, 7.0),
        ]);
        let (min, max) = poly.bounds().unwrap();
        assert_eq!(min, Vector2d::new(-1.0, -4.0));
        assert_eq!(max, Vector2d::new(3.0, 7.0));
    }

    #[test]
    fn test_serde_shape() {
        let poly = Polygon2D::new(vec![Vector2d::new(1.0, 2.0)]);
        let json = serde_json::to_string(&poly).unwrap();
        assert_eq!(json, r#"{"points":[{"x":1.0,"y":2.0}]}"#);
    }
}
