//! Closed 2D contours traced from a raster mask

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A 2D point with floating point coordinates
pub type Point2f = Point2<f32>;

/// A 2D vector with floating point components
pub type Vector2f = nalgebra::Vector2<f32>;

/// An ordered, closed sequence of points describing one traced loop.
///
/// The closing edge from the last point back to the first is implicit.
/// The sign of [`signed_area`](Contour::signed_area) encodes the winding
/// direction: positive is counter-clockwise in a y-up coordinate system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<Point2f>,
}

impl Contour {
    /// Create a contour from a point sequence
    pub fn new(points: Vec<Point2f>) -> Self {
        Self { points }
    }

    /// Get the number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the contour has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point of the loop, used as the reference for nesting tests
    pub fn first(&self) -> Option<Point2f> {
        self.points.first().copied()
    }

    /// Signed area via the shoelace formula; the sign encodes winding
    pub fn signed_area(&self) -> f32 {
        let pts = &self.points;
        if pts.len() < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..pts.len() {
            let current = pts[i];
            let next = pts[(i + 1) % pts.len()];
            area += current.x * next.y - next.x * current.y;
        }
        area / 2.0
    }

    /// Absolute area, used for significance filtering and nesting comparisons
    pub fn abs_area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Ray-casting point-in-polygon test
    pub fn contains(&self, point: Point2f) -> bool {
        let pts = &self.points;
        if pts.len() < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = pts.len() - 1;
        for i in 0..pts.len() {
            let (xi, yi) = (pts[i].x, pts[i].y);
            let (xj, yj) = (pts[j].x, pts[j].y);

            let crosses = (yi > point.y) != (yj > point.y)
                && point.x < (xj - xi) * (point.y - yi) / (yj - yi + f32::EPSILON) + xi;
            if crosses {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Reverse the point order, flipping the winding direction
    pub fn reverse(&mut self) {
        self.points.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(size: f32) -> Contour {
        Contour::new(vec![
            Point2f::new(0.0, 0.0),
            Point2f::new(size, 0.0),
            Point2f::new(size, size),
            Point2f::new(0.0, size),
        ])
    }

    #[test]
    fn signed_area_encodes_winding() {
        let ccw = square(2.0);
        assert_relative_eq!(ccw.signed_area(), 4.0);

        let mut cw = square(2.0);
        cw.reverse();
        assert_relative_eq!(cw.signed_area(), -4.0);
        assert_relative_eq!(cw.abs_area(), 4.0);
    }

    #[test]
    fn degenerate_contours_have_zero_area() {
        assert_eq!(Contour::new(vec![]).signed_area(), 0.0);
        let two = Contour::new(vec![Point2f::new(0.0, 0.0), Point2f::new(1.0, 1.0)]);
        assert_eq!(two.signed_area(), 0.0);
    }

    #[test]
    fn contains_inner_and_outer_points() {
        let sq = square(4.0);
        assert!(sq.contains(Point2f::new(2.0, 2.0)));
        assert!(sq.contains(Point2f::new(0.5, 3.5)));
        assert!(!sq.contains(Point2f::new(-1.0, 2.0)));
        assert!(!sq.contains(Point2f::new(2.0, 4.5)));
    }

    #[test]
    fn contains_is_winding_independent() {
        let mut sq = square(4.0);
        sq.reverse();
        assert!(sq.contains(Point2f::new(1.0, 1.0)));
        assert!(!sq.contains(Point2f::new(5.0, 1.0)));
    }
}
