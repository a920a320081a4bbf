//! Field tower for BLS12 curves.
//!
//! The tower is Fq ⊂ Fq2 ⊂ Fq12, where Fq2 and Fq12 are both represented as
//! polynomials over Fq modulo a fixed monic polynomial. The prime and the two
//! moduli come from a [`FieldConfig`] marker type, so fields of different
//! curves are distinct Rust types and never mix.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_bigint::BigUint;

/// Implements the by-value and mixed reference forms of binary operators in
/// terms of the `&a op &b` implementation.
macro_rules! forward_binops {
    (@one [$($gen:tt)*] $t:ty, $imp:ident, $method:ident) => {
        impl<$($gen)*> core::ops::$imp<$t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                core::ops::$imp::$method(&self, &rhs)
            }
        }

        impl<'b, $($gen)*> core::ops::$imp<&'b $t> for $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: &'b $t) -> $t {
                core::ops::$imp::$method(&self, rhs)
            }
        }

        impl<'a, $($gen)*> core::ops::$imp<$t> for &'a $t {
            type Output = $t;

            #[inline]
            fn $method(self, rhs: $t) -> $t {
                core::ops::$imp::$method(self, &rhs)
            }
        }
    };
    ($gen:tt $t:ty, $($imp:ident :: $method:ident),+ $(,)?) => {$(
        forward_binops!(@one $gen $t, $imp, $method);
    )+};
}

mod fq;
mod fqp;


pub use fq::Fq;
pub use fqp::{Dodecic, Extension, Fq12, Fq2, Fqp, Quadratic};

/// Operations the curve group law requires from a field element.
///
/// Implemented by every level of the tower; the group law in
/// [`crate::ec`] is written once against this trait.
pub trait FieldElement:
    Sized
    + Clone
    + PartialEq
    + Eq
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> Div<&'a Self, Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Embeds a small integer.
    fn from_u64(n: u64) -> Self;

    /// Returns true for the additive identity.
    fn is_zero(&self) -> bool;

    /// Multiplicative inverse, `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Raises `self` to an arbitrary non-negative power.
    fn pow(&self, exp: &BigUint) -> Self;

    /// Returns `self * self`.
    fn square(&self) -> Self {
        self.clone() * self
    }

    /// Returns `self + self`.
    fn double(&self) -> Self {
        self.clone() + self
    }
}

/// Per-curve description of the tower.
///
/// Moduli are monic with the leading coefficient omitted: `[c0, c1]` stands for
/// u² + c1·u + c0.
pub trait FieldConfig: 'static + Copy + Clone + Debug + PartialEq + Eq + Send + Sync {
    /// Curve name used in logs and panics.
    const NAME: &'static str;

    /// Fq2 modulus coefficients.
    const FQ2_MODULUS_COEFFS: [i64; 2];

    /// Fq12 modulus coefficients.
    const FQ12_MODULUS_COEFFS: [i64; 12];

    /// The base field prime.
    fn modulus() -> &'static BigUint;
}

/// Iterates the bits of `n` from most to least significant.
pub(crate) fn bits_msb_first(n: &BigUint) -> impl Iterator<Item = bool> {
    n.to_bytes_be()
        .into_iter()
        .flat_map(|byte| (0..8).rev().map(move |bit| (byte >> bit) & 1 == 1))
}
