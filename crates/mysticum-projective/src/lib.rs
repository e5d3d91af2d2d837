//! Mysticum Projective Algebra
//!
//! Exact homogeneous geometry of the rational projective plane.
//!
//! # Representation
//!
//! Points and lines are triples of [`BigRational`] up to a nonzero scalar,
//! normalized so the first nonzero coordinate is 1. No floating point is
//! involved anywhere: incidence is an exact zero test of the dot product.
//!
//! # Duality
//!
//! The line through some points and the point common to some lines are one
//! computation: the right kernel of the stacked input triples (see
//! [`kernel`]). [`line_through_points`] and [`line_intersection`] are the
//! two readings of it.
//!
//! # Pascal's Theorem
//!
//! For six points on a conic taken as a [`Hexagon`], the three meeting points
//! of opposite sides are collinear. [`Hexagon::pascal_line`] computes that
//! line and reports a violated precondition as a [`GeometryError`].

mod entity;
mod error;
mod hexagon;
mod kernel;

pub use entity::{dot, Coords, Homogeneous, Line, LineRole, Point, PointRole, Role};
pub use error::{GeometryError, Result};
pub use hexagon::{Hexagon, VERTICES};
pub use kernel::{kernel, line_intersection, line_through_points};

pub use num_rational::BigRational;

/// Dimension of the homogeneous coordinate space of the plane.
pub const DIMENSION: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_and_meet_are_dual() {
        let p = Point::from_ratios([(1, 1), (2, 1), (1, 1)]).unwrap();
        let q = Point::from_ratios([(3, 1), (-1, 1), (1, 1)]).unwrap();
        let l = line_through_points(&[p.clone(), q.clone()]).unwrap();

        // Reading the same triples as lines swaps the roles
        let lp = Line::new(p.coords().clone()).unwrap();
        let lq = Line::new(q.coords().clone()).unwrap();
        let meet = line_intersection(&[lp, lq]).unwrap();

        assert_eq!(meet.coords(), l.coords());
    }
}
