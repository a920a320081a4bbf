//! Polynomial extension fields Fq2 and Fq12.
//!
//! An element is a coefficient vector `[a0, a1, ..., a(n-1)]` standing for
//! Σ aᵢ·tⁱ modulo the monic polynomial supplied by the curve's
//! [`FieldConfig`]. Both extensions are built directly over Fq, so Fq2 sits
//! inside Fq12 as the span of 1 and t⁶.

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::Zero;

use super::{bits_msb_first, FieldConfig, FieldElement, Fq};
use crate::error::{validate, Result};

/// Degree and modulus selector for an extension of Fq.
pub trait Extension: 'static + Copy + Clone + fmt::Debug + PartialEq + Eq + Send + Sync {
    /// Extension degree over Fq.
    const DEGREE: usize;

    /// Short name, e.g. `Fq2`.
    const NAME: &'static str;

    /// Coefficient `i` of the modulus, leading term omitted.
    fn modulus_coeff<C: FieldConfig>(i: usize) -> i64;
}

/// Degree-2 extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quadratic;

impl Extension for Quadratic {
    const DEGREE: usize = 2;
    const NAME: &'static str = "Fq2";

    fn modulus_coeff<C: FieldConfig>(i: usize) -> i64 {
        C::FQ2_MODULUS_COEFFS[i]
    }
}

/// Degree-12 extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dodecic;

impl Extension for Dodecic {
    const DEGREE: usize = 12;
    const NAME: &'static str = "Fq12";

    fn modulus_coeff<C: FieldConfig>(i: usize) -> i64 {
        C::FQ12_MODULUS_COEFFS[i]
    }
}

/// Quadratic extension of the base field.
pub type Fq2<C> = Fqp<C, Quadratic>;

/// Degree-12 extension, the pairing target field.
pub type Fq12<C> = Fqp<C, Dodecic>;

/// Element of a polynomial extension of Fq.
#[derive(Clone, PartialEq, Eq)]
pub struct Fqp<C: FieldConfig, E: Extension> {
    coeffs: Vec<Fq<C>>,
    _ext: PhantomData<E>,
}

impl<C: FieldConfig, E: Extension> Fqp<C, E> {
    pub(crate) fn from_vec(coeffs: Vec<Fq<C>>) -> Self {
        debug_assert_eq!(coeffs.len(), E::DEGREE);
        Fqp {
            coeffs,
            _ext: PhantomData,
        }
    }

    /// Builds an element from exactly `E::DEGREE` coefficients.
    pub fn from_coeffs(coeffs: Vec<Fq<C>>) -> Result<Self> {
        validate::length("extension field coefficients", coeffs.len(), E::DEGREE)?;
        Ok(Self::from_vec(coeffs))
    }

    /// Builds an element from small signed integer coefficients.
    pub fn from_i64_coeffs(coeffs: &[i64]) -> Result<Self> {
        Self::from_coeffs(coeffs.iter().map(|&c| Fq::from_i64(c)).collect())
    }

    /// Embeds a base field element as a constant polynomial.
    pub fn from_base(c: Fq<C>) -> Self {
        let mut coeffs = vec![Fq::zero(); E::DEGREE];
        coeffs[0] = c;
        Self::from_vec(coeffs)
    }

    /// Coefficients, lowest degree first.
    pub fn coeffs(&self) -> &[Fq<C>] {
        &self.coeffs
    }

    fn modulus_poly() -> Vec<Fq<C>> {
        let mut m: Vec<Fq<C>> = (0..E::DEGREE)
            .map(|i| Fq::from_i64(E::modulus_coeff::<C>(i)))
            .collect();
        m.push(Fq::one());
        m
    }
}

impl<C: FieldConfig, E: Extension> FieldElement for Fqp<C, E> {
    fn zero() -> Self {
        Self::from_vec(vec![Fq::zero(); E::DEGREE])
    }

    fn one() -> Self {
        Self::from_base(Fq::one())
    }

    fn from_u64(n: u64) -> Self {
        Self::from_base(Fq::from_u64(n))
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Inverse by the extended Euclidean algorithm on polynomials over Fq.
    fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        // Invariant: s_i · self ≡ r_i (mod m)
        let (mut r0, mut r1) = (Self::modulus_poly(), poly::trim(self.coeffs.clone()));
        let (mut s0, mut s1) = (Vec::new(), vec![Fq::one()]);
        while !r1.is_empty() {
            let (q, r) = poly::div_rem(&r0, &r1)?;
            let s = poly::sub(&s0, &poly::mul(&q, &s1));
            r0 = core::mem::replace(&mut r1, r);
            s0 = core::mem::replace(&mut s1, s);
        }
        // A non-constant gcd means the modulus is reducible and self is a zero divisor.
        if r0.len() != 1 {
            return None;
        }
        let scale = r0[0].invert()?;
        let mut coeffs: Vec<Fq<C>> = s0.into_iter().map(|c| c * &scale).collect();
        coeffs.resize(E::DEGREE, Fq::zero());
        Some(Self::from_vec(coeffs))
    }

    fn pow(&self, exp: &BigUint) -> Self {
        let mut acc = Self::one();
        for bit in bits_msb_first(exp) {
            acc = acc.square();
            if bit {
                acc = acc * self;
            }
        }
        acc
    }
}

impl<'a, 'b, C: FieldConfig, E: Extension> Add<&'b Fqp<C, E>> for &'a Fqp<C, E> {
    type Output = Fqp<C, E>;

    fn add(self, rhs: &'b Fqp<C, E>) -> Fqp<C, E> {
        Fqp::from_vec(
            self.coeffs
                .iter()
                .zip(rhs.coeffs.iter())
                .map(|(a, b)| a + b)
                .collect(),
        )
    }
}

impl<'a, 'b, C: FieldConfig, E: Extension> Sub<&'b Fqp<C, E>> for &'a Fqp<C, E> {
    type Output = Fqp<C, E>;

    fn sub(self, rhs: &'b Fqp<C, E>) -> Fqp<C, E> {
        Fqp::from_vec(
            self.coeffs
                .iter()
                .zip(rhs.coeffs.iter())
                .map(|(a, b)| a - b)
                .collect(),
        )
    }
}

impl<'a, 'b, C: FieldConfig, E: Extension> Mul<&'b Fqp<C, E>> for &'a Fqp<C, E> {
    type Output = Fqp<C, E>;

    /// Schoolbook product, accumulated unreduced, then folded back with
    /// tⁿ = −Σ cᵢ·tⁱ from the top degree down.
    fn mul(self, rhs: &'b Fqp<C, E>) -> Fqp<C, E> {
        let n = E::DEGREE;
        let p = C::modulus();
        let mut prod = vec![BigUint::zero(); 2 * n - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                prod[i + j] += a.value() * b.value();
            }
        }
        for top in (n..2 * n - 1).rev() {
            let t = core::mem::take(&mut prod[top]) % p;
            if t.is_zero() {
                continue;
            }
            let neg_t = p - &t;
            for i in 0..n {
                let c = E::modulus_coeff::<C>(i);
                match c.cmp(&0) {
                    Ordering::Greater => prod[top - n + i] += &neg_t * c.unsigned_abs(),
                    Ordering::Less => prod[top - n + i] += &t * c.unsigned_abs(),
                    Ordering::Equal => {}
                }
            }
        }
        prod.truncate(n);
        Fqp::from_vec(prod.into_iter().map(Fq::new).collect())
    }
}

/// # Panics
///
/// Panics if `rhs` is zero.
impl<'a, 'b, C: FieldConfig, E: Extension> Div<&'b Fqp<C, E>> for &'a Fqp<C, E> {
    type Output = Fqp<C, E>;

    fn div(self, rhs: &'b Fqp<C, E>) -> Fqp<C, E> {
        match rhs.invert() {
            Some(inv) => self * &inv,
            None => panic!("division by zero in {} {}", C::NAME, E::NAME),
        }
    }
}

forward_binops!([C: FieldConfig, E: Extension] Fqp<C, E>, Add::add, Sub::sub, Mul::mul, Div::div);

impl<'a, C: FieldConfig, E: Extension> Neg for &'a Fqp<C, E> {
    type Output = Fqp<C, E>;

    fn neg(self) -> Fqp<C, E> {
        Fqp::from_vec(self.coeffs.iter().map(|c| -c).collect())
    }
}

impl<C: FieldConfig, E: Extension> Neg for Fqp<C, E> {
    type Output = Fqp<C, E>;

    #[inline]
    fn neg(self) -> Fqp<C, E> {
        -&self
    }
}

impl<C: FieldConfig, E: Extension> fmt::Debug for Fqp<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", E::NAME)?;
        f.debug_list().entries(self.coeffs.iter()).finish()?;
        write!(f, ")")
    }
}

impl<C: FieldConfig, E: Extension> Default for Fqp<C, E> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Dense polynomials over Fq, lowest degree first, trimmed of leading zeros.
/// The zero polynomial is the empty vector.
mod poly {
    use super::super::{FieldConfig, FieldElement, Fq};

    pub(super) fn trim<C: FieldConfig>(mut a: Vec<Fq<C>>) -> Vec<Fq<C>> {
        while a.last().map_or(false, |c| c.is_zero()) {
            a.pop();
        }
        a
    }

    pub(super) fn sub<C: FieldConfig>(a: &[Fq<C>], b: &[Fq<C>]) -> Vec<Fq<C>> {
        let len = a.len().max(b.len());
        let zero = Fq::zero();
        trim(
            (0..len)
                .map(|i| a.get(i).unwrap_or(&zero) - b.get(i).unwrap_or(&zero))
                .collect(),
        )
    }

    pub(super) fn mul<C: FieldConfig>(a: &[Fq<C>], b: &[Fq<C>]) -> Vec<Fq<C>> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }
        let mut out = vec![Fq::zero(); a.len() + b.len() - 1];
        for (i, x) in a.iter().enumerate() {
            for (j, y) in b.iter().enumerate() {
                out[i + j] = &out[i + j] + &(x * y);
            }
        }
        trim(out)
    }

    /// Long division; `None` if `den` is the zero polynomial.
    pub(super) fn div_rem<C: FieldConfig>(
        num: &[Fq<C>],
        den: &[Fq<C>],
    ) -> Option<(Vec<Fq<C>>, Vec<Fq<C>>)> {
        let lead_inv = den.last()?.invert()?;
        let dd = den.len() - 1;
        let mut rem = num.to_vec();
        if rem.len() < den.len() {
            return Some((Vec::new(), trim(rem)));
        }
        let mut quot = vec![Fq::zero(); rem.len() - dd];
        for k in (0..quot.len()).rev() {
            let coef = &rem[k + dd] * &lead_inv;
            for (j, d) in den.iter().enumerate() {
                rem[k + j] = &rem[k + j] - &(&coef * d);
            }
            quot[k] = coef;
        }
        Some((trim(quot), trim(rem)))
    }
}
