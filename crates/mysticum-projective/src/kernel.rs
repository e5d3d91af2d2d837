//! Exact null space over the rationals.
//!
//! Joining points and meeting lines are the same computation under
//! projective duality: stack the inputs as rows of an `n × 3` matrix and take
//! its right kernel. A one-dimensional kernel is the answer; anything else is
//! a degenerate configuration.
//!
//! ```text
//! dim ker = 0  →  OverDetermined   (no common line/point)
//! dim ker = 1  →  the unique line/point
//! dim ker ≥ 2  →  UnderDetermined  (too few independent constraints)
//! ```

use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::entity::{normalize, Coords, Homogeneous, Line, Point, Role};
use crate::{GeometryError, Result, DIMENSION};

/// Basis of `{x : r · x = 0 for every row r}`.
///
/// Gauss-Jordan elimination to reduced row echelon form, then one basis
/// vector per free column. Vectors are returned unnormalized.
pub fn kernel(rows: &[Coords]) -> Vec<Coords> {
    let mut matrix: Vec<Coords> = rows.to_vec();
    let mut pivots: Vec<usize> = Vec::with_capacity(DIMENSION);

    for col in 0..DIMENSION {
        let rank = pivots.len();
        if rank == matrix.len() {
            break;
        }
        let Some(found) = (rank..matrix.len()).find(|&i| !matrix[i][col].is_zero()) else {
            continue;
        };
        matrix.swap(rank, found);

        let pivot = matrix[rank][col].clone();
        for c in matrix[rank].iter_mut() {
            *c /= &pivot;
        }

        let pivot_row = matrix[rank].clone();
        for (i, row) in matrix.iter_mut().enumerate() {
            if i == rank || row[col].is_zero() {
                continue;
            }
            let factor = row[col].clone();
            for (c, p) in row.iter_mut().zip(pivot_row.iter()) {
                *c -= &factor * p;
            }
        }
        pivots.push(col);
    }

    (0..DIMENSION)
        .filter(|col| !pivots.contains(col))
        .map(|free| {
            let mut v: Coords = std::array::from_fn(|_| BigRational::zero());
            v[free] = BigRational::one();
            for (row, &pivot_col) in pivots.iter().enumerate() {
                v[pivot_col] = -matrix[row][free].clone();
            }
            v
        })
        .collect()
}

/// The unique entity incident to every constraint, in the dual role.
fn solve<R: Role>(constraints: &[Homogeneous<R>]) -> Result<Homogeneous<R::Dual>> {
    let rows: Vec<Coords> = constraints.iter().map(|c| c.coords().clone()).collect();
    let mut basis = kernel(&rows);
    match basis.len() {
        0 => Err(GeometryError::OverDetermined),
        1 => {
            let v = basis.pop().ok_or(GeometryError::OverDetermined)?;
            Ok(Homogeneous::from_normalized(normalize(v)?))
        }
        dimension => Err(GeometryError::UnderDetermined { dimension }),
    }
}

/// The line through all of `points`.
///
/// Fails with [`GeometryError::UnderDetermined`] for fewer than two distinct
/// points, and with [`GeometryError::OverDetermined`] when the points are
/// not collinear.
pub fn line_through_points(points: &[Point]) -> Result<Line> {
    solve(points)
}

/// The common point of all of `lines`.
///
/// Dual of [`line_through_points`]: fails with
/// [`GeometryError::UnderDetermined`] for fewer than two distinct lines, and
/// with [`GeometryError::OverDetermined`] when the lines are not concurrent.
pub fn line_intersection(lines: &[Line]) -> Result<Point> {
    solve(lines)
}
