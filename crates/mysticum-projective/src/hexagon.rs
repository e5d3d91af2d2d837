//! Ordered hexagons and the Pascal construction.
//!
//! A hexagon is six points visited in order. Its sides are the lines through
//! consecutive vertices, and side `i` is opposite side `i + 3`. When the six
//! vertices lie on a conic, the three intersections of opposite sides are
//! collinear (Pascal's theorem); the line they span is the Pascal line.

use std::fmt;

use crate::{line_intersection, line_through_points, Line, Point, Result};

/// Number of vertices of a hexagon.
pub const VERTICES: usize = 6;

/// Six points in a fixed visiting order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hexagon {
    vertices: [Point; VERTICES],
}

impl Hexagon {
    /// Create from six vertices in visiting order.
    ///
    /// The caller is responsible for the vertices lying on a common conic;
    /// a violated precondition surfaces later as a geometry error.
    pub fn new(vertices: [Point; VERTICES]) -> Self {
        Self { vertices }
    }

    /// All six vertices, 0-based.
    pub fn vertices(&self) -> &[Point; VERTICES] {
        &self.vertices
    }

    /// The vertex with 1-based label `label`, if in range.
    pub fn vertex(&self, label: usize) -> Option<&Point> {
        label.checked_sub(1).and_then(|i| self.vertices.get(i))
    }

    /// The hexagon visiting this one's vertices in `order` (0-based indices).
    pub fn reindexed(&self, order: &[usize; VERTICES]) -> Self {
        Self {
            vertices: order.map(|i| self.vertices[i % VERTICES].clone()),
        }
    }

    /// The line through vertices `i` and `i + 1` (indices mod 6).
    pub fn side(&self, i: usize) -> Result<Line> {
        line_through_points(&[
            self.vertices[i % VERTICES].clone(),
            self.vertices[(i + 1) % VERTICES].clone(),
        ])
    }

    /// The three intersections of opposite sides: (0-1, 3-4), (1-2, 4-5), (2-3, 5-0).
    pub fn opposite_side_points(&self) -> Result<[Point; 3]> {
        let meet = |i: usize| -> Result<Point> {
            line_intersection(&[self.side(i)?, self.side(i + 3)?])
        };
        Ok([meet(0)?, meet(1)?, meet(2)?])
    }

    /// The Pascal line of this hexagon in its natural order.
    pub fn pascal_line(&self) -> Result<Line> {
        line_through_points(&self.opposite_side_points()?)
    }
}

impl From<[Point; VERTICES]> for Hexagon {
    fn from(vertices: [Point; VERTICES]) -> Self {
        Self::new(vertices)
    }
}

impl fmt::Display for Hexagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryError;

    /// Six rational points on the unit circle.
    fn unit_circle_hexagon() -> Hexagon {
        Hexagon::new([
            Point::from_ratios([(5, 13), (12, 13), (1, 1)]).unwrap(),
            Point::from_ratios([(1, 1), (0, 1), (1, 1)]).unwrap(),
            Point::from_ratios([(8, 17), (-15, 17), (1, 1)]).unwrap(),
            Point::from_ratios([(-4, 5), (-3, 5), (1, 1)]).unwrap(),
            Point::from_ratios([(-40, 41), (-9, 41), (1, 1)]).unwrap(),
            Point::from_ratios([(-3, 5), (4, 5), (1, 1)]).unwrap(),
        ])
    }

    #[test]
    fn pascal_line_of_natural_order() {
        let line = unit_circle_hexagon().pascal_line().unwrap();
        assert_eq!(line, Line::from_ratios([(1, 1), (18, 179), (847, 179)]).unwrap());
    }

    #[test]
    fn opposite_side_points_lie_on_pascal_line() {
        let hex = unit_circle_hexagon();
        let line = hex.pascal_line().unwrap();
        for p in hex.opposite_side_points().unwrap() {
            assert!(line.contains(&p));
        }
    }

    #[test]
    fn reversed_hexagon_has_same_pascal_line() {
        let hex = unit_circle_hexagon();
        let reversed = hex.reindexed(&[0, 5, 4, 3, 2, 1]);
        assert_eq!(reversed.pascal_line().unwrap(), hex.pascal_line().unwrap());
    }

    #[test]
    fn rotated_hexagon_has_same_pascal_line() {
        let hex = unit_circle_hexagon();
        let rotated = hex.reindexed(&[2, 3, 4, 5, 0, 1]);
        assert_eq!(rotated.pascal_line().unwrap(), hex.pascal_line().unwrap());
    }

    #[test]
    fn vertex_labels_are_one_based() {
        let hex = unit_circle_hexagon();
        assert_eq!(hex.vertex(1), Some(&hex.vertices()[0]));
        assert_eq!(hex.vertex(6), Some(&hex.vertices()[5]));
        assert_eq!(hex.vertex(0), None);
        assert_eq!(hex.vertex(7), None);
    }

    #[test]
    fn repeated_vertex_is_degenerate() {
        let hex = unit_circle_hexagon();
        let degenerate = hex.reindexed(&[0, 0, 2, 3, 4, 5]);
        let err = degenerate.pascal_line().unwrap_err();
        assert!(matches!(err, GeometryError::UnderDetermined { .. }));
    }

    #[test]
    fn off_conic_hexagon_is_over_determined() {
        // Moving one vertex off the circle breaks Pascal's theorem
        let mut vertices = unit_circle_hexagon().vertices().clone();
        vertices[0] = Point::from_ratios([(1, 3), (1, 1), (1, 1)]).unwrap();
        let err = Hexagon::new(vertices).pascal_line().unwrap_err();
        assert_eq!(err, GeometryError::OverDetermined);
    }
}
