//! Prime field Fq.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{FieldConfig, FieldElement};
use crate::error::{validate, Result};

/// Element of the prime field of curve `C`, kept fully reduced.
#[derive(Clone, PartialEq, Eq)]
pub struct Fq<C: FieldConfig> {
    value: BigUint,
    _config: PhantomData<C>,
}

impl<C: FieldConfig> Fq<C> {
    /// Reduces `value` modulo p.
    pub fn new(value: BigUint) -> Self {
        Self::from_reduced(value % C::modulus())
    }

    fn from_reduced(value: BigUint) -> Self {
        Fq {
            value,
            _config: PhantomData,
        }
    }

    /// Embeds a signed integer, mapping negatives to p − |n|.
    pub fn from_i64(n: i64) -> Self {
        let v = <Self as FieldElement>::from_u64(n.unsigned_abs());
        if n < 0 {
            -v
        } else {
            v
        }
    }

    /// Interprets big-endian bytes, rejecting values not below p.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self> {
        validate::max_length("field element bytes", bytes.len(), Self::byte_len())?;
        let value = BigUint::from_bytes_be(bytes);
        validate::parameter(
            &value < C::modulus(),
            "field element",
            "value is not reduced modulo p",
        )?;
        Ok(Self::from_reduced(value))
    }

    /// Big-endian encoding padded to the byte length of p.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let raw = self.value.to_bytes_be();
        let mut out = vec![0u8; Self::byte_len()];
        out[Self::byte_len() - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Canonical representative in [0, p).
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    fn byte_len() -> usize {
        ((C::modulus().bits() + 7) / 8) as usize
    }
}

impl<C: FieldConfig> FieldElement for Fq<C> {
    fn zero() -> Self {
        Self::from_reduced(BigUint::zero())
    }

    fn one() -> Self {
        Self::from_reduced(BigUint::one())
    }

    fn from_u64(n: u64) -> Self {
        Self::new(BigUint::from(n))
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        // Fermat: a^(p-2) = a^-1
        let exp = C::modulus() - 2u32;
        Some(self.pow(&exp))
    }

    fn pow(&self, exp: &BigUint) -> Self {
        Self::from_reduced(self.value.modpow(exp, C::modulus()))
    }

    fn square(&self) -> Self {
        self * self
    }
}

impl<'a, 'b, C: FieldConfig> Add<&'b Fq<C>> for &'a Fq<C> {
    type Output = Fq<C>;

    fn add(self, rhs: &'b Fq<C>) -> Fq<C> {
        let sum = &self.value + &rhs.value;
        if &sum >= C::modulus() {
            Fq::from_reduced(sum - C::modulus())
        } else {
            Fq::from_reduced(sum)
        }
    }
}

impl<'a, 'b, C: FieldConfig> Sub<&'b Fq<C>> for &'a Fq<C> {
    type Output = Fq<C>;

    fn sub(self, rhs: &'b Fq<C>) -> Fq<C> {
        if self.value >= rhs.value {
            Fq::from_reduced(&self.value - &rhs.value)
        } else {
            Fq::from_reduced(C::modulus() - &rhs.value + &self.value)
        }
    }
}

impl<'a, 'b, C: FieldConfig> Mul<&'b Fq<C>> for &'a Fq<C> {
    type Output = Fq<C>;

    fn mul(self, rhs: &'b Fq<C>) -> Fq<C> {
        Fq::new(&self.value * &rhs.value)
    }
}

/// # Panics
///
/// Panics if `rhs` is zero, like integer division.
impl<'a, 'b, C: FieldConfig> Div<&'b Fq<C>> for &'a Fq<C> {
    type Output = Fq<C>;

    fn div(self, rhs: &'b Fq<C>) -> Fq<C> {
        match rhs.invert() {
            Some(inv) => self * &inv,
            None => panic!("division by zero in {} Fq", C::NAME),
        }
    }
}

forward_binops!([C: FieldConfig] Fq<C>, Add::add, Sub::sub, Mul::mul, Div::div);

impl<'a, C: FieldConfig> Neg for &'a Fq<C> {
    type Output = Fq<C>;

    fn neg(self) -> Fq<C> {
        if self.is_zero() {
            self.clone()
        } else {
            Fq::from_reduced(C::modulus() - &self.value)
        }
    }
}

impl<C: FieldConfig> Neg for Fq<C> {
    type Output = Fq<C>;

    #[inline]
    fn neg(self) -> Fq<C> {
        -&self
    }
}

impl<C: FieldConfig> fmt::Debug for Fq<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fq(0x{:x})", self.value)
    }
}

impl<C: FieldConfig> Default for Fq<C> {
    fn default() -> Self {
        Self::zero()
    }
}
