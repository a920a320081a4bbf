//! Affine points and the Weierstrass group law.

use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Neg};

use num_bigint::BigUint;

use crate::field::{bits_msb_first, FieldElement};

/// A point on y² = x³ + b over the field `F`, or the point at infinity.
///
/// Points are immutable values; every operation returns a new point. The
/// curve constant is not stored in the point, so the group law never checks
/// curve membership. Callers that accept untrusted coordinates must call
/// [`Point::is_on_curve`] first.
#[derive(Clone, PartialEq, Eq)]
pub enum Point<F> {
    /// The identity element.
    Infinity,
    /// A finite point.
    Affine {
        /// x coordinate
        x: F,
        /// y coordinate
        y: F,
    },
}

impl<F: FieldElement> Point<F> {
    /// Finite point from its coordinates, unchecked.
    pub fn new(x: F, y: F) -> Self {
        Point::Affine { x, y }
    }

    /// Coordinates of a finite point.
    pub fn coords(&self) -> Option<(&F, &F)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_inf(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Curve membership check for y² = x³ + b. Infinity is on every curve.
    pub fn is_on_curve(&self, b: &F) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine { x, y } => y.square() - &(x.square() * x) == *b,
        }
    }

    /// Returns −P = (x, −y).
    pub fn neg(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: -y.clone(),
            },
        }
    }

    /// Returns 2P.
    ///
    /// A point with y = 0 has order two and doubles to infinity.
    pub fn double(&self) -> Self {
        let (x, y) = match self {
            Point::Infinity => return Point::Infinity,
            Point::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Point::Infinity;
        }

        // λ = 3·x² / 2·y
        let m = x.square() * F::from_u64(3) / y.double();
        // x' = λ² − 2·x
        let nx = m.square() - &x.double();
        // y' = −λ·x' + λ·x − y
        let ny = -(m.clone() * &nx) + &(m * x) - y;

        Point::Affine { x: nx, y: ny }
    }

    /// Returns P + Q.
    pub fn add(&self, other: &Self) -> Self {
        let ((x1, y1), (x2, y2)) = match (self, other) {
            (Point::Infinity, _) => return other.clone(),
            (_, Point::Infinity) => return self.clone(),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if x1 == x2 {
            // Either P = Q, or P = −Q and the chord is vertical.
            return if y1 == y2 {
                self.double()
            } else {
                Point::Infinity
            };
        }

        // λ = (y₂ − y₁) / (x₂ − x₁)
        let m = (y2.clone() - y1) / (x2.clone() - x1);
        // x' = λ² − x₁ − x₂
        let nx = m.square() - x1 - x2;
        // y' = −λ·x' + λ·x₁ − y₁
        let ny = -(m.clone() * &nx) + &(m * x1) - y1;

        Point::Affine { x: nx, y: ny }
    }

    /// Returns [n]P by left-to-right double-and-add.
    ///
    /// The scalar is unsigned, so negative multiples are expressed as
    /// `p.neg().multiply(n)`. Iterative: stack use does not grow with the
    /// bit length of `n`. Runs in variable time.
    pub fn multiply(&self, n: &BigUint) -> Self {
        let mut acc = Point::Infinity;
        for bit in bits_msb_first(n) {
            acc = acc.double();
            if bit {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// Convenience wrapper over [`Point::multiply`] for small scalars.
    pub fn multiply_u64(&self, n: u64) -> Self {
        self.multiply(&BigUint::from(n))
    }
}

impl<F: FieldElement> Default for Point<F> {
    fn default() -> Self {
        Point::Infinity
    }
}

impl<F: FieldElement> fmt::Debug for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "Point::Infinity"),
            Point::Affine { x, y } => f.debug_tuple("Point").field(x).field(y).finish(),
        }
    }
}

impl<'a, F: FieldElement> Neg for &'a Point<F> {
    type Output = Point<F>;

    #[inline]
    fn neg(self) -> Point<F> {
        Point::neg(self)
    }
}

impl<'a, 'b, F: FieldElement> Add<&'b Point<F>> for &'a Point<F> {
    type Output = Point<F>;

    #[inline]
    fn add(self, rhs: &'b Point<F>) -> Point<F> {
        Point::add(self, rhs)
    }
}

impl<F: FieldElement, T> Sum<T> for Point<F>
where
    T: Borrow<Point<F>>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Point::Infinity, |acc, item| acc.add(item.borrow()))
    }
}
