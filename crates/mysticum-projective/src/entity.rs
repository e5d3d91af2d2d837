//! Homogeneous points and lines of the rational projective plane.
//!
//! A point and a line are both a triple of rationals taken up to a nonzero
//! scalar. They differ only in role: a point `p` lies on a line `l` iff the
//! dot product `p · l` is zero. The shared representation is
//! [`Homogeneous`], tagged with a zero-sized [`Role`] marker.
//!
//! Every constructor scales the triple so that its first nonzero coordinate
//! is 1. After that, structural equality, ordering and hashing coincide with
//! projective equality.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::{GeometryError, Result};

/// A raw homogeneous coordinate triple.
pub type Coords = [BigRational; 3];

/// Role marker distinguishing points from lines.
pub trait Role: sealed::Sealed + Copy + fmt::Debug + 'static {
    /// Human-readable name of the role.
    const NAME: &'static str;
    /// The dual role (point <-> line).
    type Dual: Role<Dual = Self>;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::PointRole {}
    impl Sealed for super::LineRole {}
}

/// Marker for vectors (points).
#[derive(Debug, Clone, Copy)]
pub enum PointRole {}

/// Marker for covectors (lines).
#[derive(Debug, Clone, Copy)]
pub enum LineRole {}

impl Role for PointRole {
    const NAME: &'static str = "Point";
    type Dual = LineRole;
}

impl Role for LineRole {
    const NAME: &'static str = "Line";
    type Dual = PointRole;
}

/// A normalized homogeneous triple playing role `R`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "[String; 3]", try_from = "[String; 3]", bound = ""))]
pub struct Homogeneous<R: Role> {
    coords: Coords,
    role: PhantomData<R>,
}

/// A point of the projective plane.
pub type Point = Homogeneous<PointRole>;

/// A line of the projective plane.
pub type Line = Homogeneous<LineRole>;

/// Scale `coords` so the first nonzero entry is 1.
pub(crate) fn normalize(coords: Coords) -> Result<Coords> {
    let lead = coords
        .iter()
        .find(|c| !c.is_zero())
        .cloned()
        .ok_or(GeometryError::ZeroVector)?;
    Ok(coords.map(|c| c / &lead))
}

/// The bilinear incidence pairing.
pub fn dot(a: &Coords, b: &Coords) -> BigRational {
    a.iter()
        .zip(b.iter())
        .fold(BigRational::zero(), |acc, (x, y)| acc + x * y)
}

impl<R: Role> Homogeneous<R> {
    /// Create from a coordinate triple, normalizing scale.
    ///
    /// Fails with [`GeometryError::ZeroVector`] for `[0, 0, 0]`.
    pub fn new(coords: Coords) -> Result<Self> {
        Ok(Self::from_normalized(normalize(coords)?))
    }

    /// Create from integer `(numerator, denominator)` pairs.
    pub fn from_ratios(ratios: [(i64, i64); 3]) -> Result<Self> {
        let mut coords = Vec::with_capacity(3);
        for (numer, denom) in ratios {
            if denom == 0 {
                return Err(GeometryError::InvalidCoordinate(format!("{}/0", numer)));
            }
            coords.push(BigRational::new(BigInt::from(numer), BigInt::from(denom)));
        }
        let coords: Coords = coords
            .try_into()
            .map_err(|_| GeometryError::InvalidCoordinate("expected three coordinates".into()))?;
        Self::new(coords)
    }

    pub(crate) fn from_normalized(coords: Coords) -> Self {
        Self {
            coords,
            role: PhantomData,
        }
    }

    /// The normalized coordinate triple.
    pub fn coords(&self) -> &Coords {
        &self.coords
    }

    /// Consume into the normalized coordinate triple.
    pub fn into_coords(self) -> Coords {
        self.coords
    }

    /// Whether `self` and the dual entity `other` are incident.
    pub fn incident(&self, other: &Homogeneous<R::Dual>) -> bool {
        dot(&self.coords, other.coords()).is_zero()
    }
}

impl Point {
    /// The point `[x, y, 1]` of the affine chart `z = 1`.
    pub fn affine(x: BigRational, y: BigRational) -> Self {
        let lead = [&x, &y]
            .into_iter()
            .find(|c| !c.is_zero())
            .cloned()
            .unwrap_or_else(BigRational::one);
        let z = BigRational::one() / &lead;
        Self::from_normalized([x / &lead, y / &lead, z])
    }

    /// Affine coordinates `(x/z, y/z)`, or `None` for a point at infinity.
    pub fn to_affine(&self) -> Option<(BigRational, BigRational)> {
        let [x, y, z] = &self.coords;
        if z.is_zero() {
            return None;
        }
        Some((x / z, y / z))
    }

    /// Whether this point lies on `line`.
    pub fn lies_on(&self, line: &Line) -> bool {
        self.incident(line)
    }
}

impl Line {
    /// Whether `point` lies on this line.
    pub fn contains(&self, point: &Point) -> bool {
        self.incident(point)
    }

    /// The line at infinity `[0, 0, 1]`.
    pub fn at_infinity() -> Self {
        Self::from_normalized([BigRational::zero(), BigRational::zero(), BigRational::one()])
    }
}

impl<R: Role> Clone for Homogeneous<R> {
    fn clone(&self) -> Self {
        Self::from_normalized(self.coords.clone())
    }
}

impl<R: Role> PartialEq for Homogeneous<R> {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl<R: Role> Eq for Homogeneous<R> {}

impl<R: Role> PartialOrd for Homogeneous<R> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Role> Ord for Homogeneous<R> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.coords.cmp(&other.coords)
    }
}

impl<R: Role> Hash for Homogeneous<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords.hash(state);
    }
}

impl<R: Role> fmt::Debug for Homogeneous<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", R::NAME, self)
    }
}

impl<R: Role> fmt::Display for Homogeneous<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.coords;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

impl<R: Role> From<Homogeneous<R>> for [String; 3] {
    fn from(entity: Homogeneous<R>) -> Self {
        entity.coords.map(|c| c.to_string())
    }
}

impl<R: Role> TryFrom<[String; 3]> for Homogeneous<R> {
    type Error = GeometryError;

    fn try_from(value: [String; 3]) -> Result<Self> {
        let mut coords = Vec::with_capacity(3);
        for text in &value {
            let c: BigRational = text
                .trim()
                .parse()
                .map_err(|_| GeometryError::InvalidCoordinate(text.clone()))?;
            coords.push(c);
        }
        let coords: Coords = coords
            .try_into()
            .map_err(|_| GeometryError::InvalidCoordinate("expected three coordinates".into()))?;
        Self::new(coords)
    }
}
