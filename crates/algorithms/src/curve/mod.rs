//! Curve parameters for BLS12 pairing-friendly curves
//!
//! [`CurveParams`] decodes the raw [`CurveConstants`] of one named curve into
//! field elements and points, then validates them once. Every check that the
//! curve is correctly specified happens in [`CurveParams::new`]; the group
//! law and the pairing never re-check it.

use blscurve_params::curves::FIELD_ELEMENT_SIZE;
use blscurve_params::CurveConstants;
use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::ec::{Point, Twist};
use crate::error::{validate, Result};
use crate::field::{FieldConfig, FieldElement, Fq, Fq12, Fq2};

pub mod bls12_377;
pub mod bls12_381;


pub use bls12_377::Bls12_377;
pub use bls12_381::Bls12_381;

/// Point of G1, over the base field.
pub type G1<C> = Point<Fq<C>>;

/// Point of G2, on the twist curve over Fq2.
pub type G2<C> = Point<Fq2<C>>;

/// Point of the curve over Fq12, where the pairing evaluates.
pub type G12<C> = Point<Fq12<C>>;

/// Bases for the Miller-Rabin test on the group order.
const MILLER_RABIN_BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// A named curve whose field configuration and constants are known statically.
pub trait NamedCurve: FieldConfig {
    /// Raw constants of the curve.
    const CONSTANTS: CurveConstants;

    /// Decodes and validates the curve's parameters.
    fn params() -> Result<CurveParams<Self>> {
        CurveParams::new(&Self::CONSTANTS)
    }
}

/// Validated parameters of one BLS12 curve.
///
/// Immutable once built, and cheap to share by reference across threads.
#[derive(Clone, Debug)]
pub struct CurveParams<C: FieldConfig> {
    constants: CurveConstants,
    curve_order: BigUint,
    b: Fq<C>,
    b2: Fq2<C>,
    b12: Fq12<C>,
    g1: G1<C>,
    g2: G2<C>,
    g12: G12<C>,
    twist: Twist<C>,
    final_exponent: BigUint,
}

impl<C: FieldConfig> CurveParams<C> {
    /// Decodes `constants` for the field configuration `C` and validates them.
    ///
    /// Fails with [`Error::Parameter`](crate::error::Error::Parameter) if the
    /// constants do not describe a valid BLS12 curve over `C`.
    pub fn new(constants: &CurveConstants) -> Result<Self> {
        debug!(curve = constants.name, "decoding curve constants");

        let modulus = BigUint::from_bytes_be(&constants.field_modulus);
        validate::parameter(
            &modulus == C::modulus(),
            "field_modulus",
            "does not match the field configuration",
        )?;
        validate::parameter(
            constants.fq2_modulus_coeffs == C::FQ2_MODULUS_COEFFS
                && constants.fq12_modulus_coeffs == C::FQ12_MODULUS_COEFFS,
            "tower",
            "extension moduli do not match the field configuration",
        )?;

        let curve_order = BigUint::from_bytes_be(&constants.curve_order);
        validate::parameter(!curve_order.is_zero(), "curve_order", "must be non-zero")?;

        let b = Fq::from_u64(constants.b);
        let b2 = fq2_from_bytes(&constants.b2)?;
        let b12 = Fq12::from_base(b.clone());

        let g1 = Point::new(
            Fq::from_canonical_bytes(&constants.g1[0])?,
            Fq::from_canonical_bytes(&constants.g1[1])?,
        );
        let g2 = Point::new(
            fq2_from_bytes(&constants.g2_x)?,
            fq2_from_bytes(&constants.g2_y)?,
        );

        let twist = Twist::new(constants.twist, constants.xi_c0)?;
        let g12 = twist.apply(&g2);

        let final_exponent = (modulus.pow(12u32) - 1u32) / &curve_order;

        let params = CurveParams {
            constants: *constants,
            curve_order,
            b,
            b2,
            b12,
            g1,
            g2,
            g12,
            twist,
            final_exponent,
        };
        params.validate()?;

        info!(curve = constants.name, twist = ?constants.twist, "curve parameters loaded");
        Ok(params)
    }

    /// Re-runs every consistency check on the decoded parameters.
    pub fn validate(&self) -> Result<()> {
        let p = C::modulus();
        let r = &self.curve_order;

        self.check(is_probable_prime(r), "curve_order", "group order is not prime")?;
        self.check(
            (p.pow(12u32) - 1u32) % r == BigUint::zero(),
            "curve_order",
            "group order does not divide p^12 - 1",
        )?;
        self.check(
            self.tower_is_consistent(),
            "tower",
            "xi does not satisfy the Fq2 relation inside Fq12",
        )?;
        self.check(self.g1.is_on_curve(&self.b), "g1", "generator is not on the curve")?;
        self.check(
            self.g1.multiply(r).is_inf(),
            "g1",
            "generator does not have the group order",
        )?;
        self.check(
            self.g2.is_on_curve(&self.b2),
            "g2",
            "generator is not on the twist curve",
        )?;
        self.check(
            self.g2.multiply(r).is_inf(),
            "g2",
            "generator does not have the group order",
        )?;
        self.check(
            self.g12.is_on_curve(&self.b12),
            "twist",
            "twisted generator is not on the curve over Fq12",
        )?;
        Ok(())
    }

    fn check(&self, passed: bool, name: &'static str, reason: &'static str) -> Result<()> {
        debug!(curve = self.name(), check = name, passed, "curve parameter check");
        if !passed {
            warn!(curve = self.name(), check = name, reason, "curve parameter check failed");
        }
        validate::parameter(passed, name, reason)
    }

    /// The image of u under the embedding of Fq2 must be a root of the Fq2
    /// modulus u² + c1·u + c0 in Fq12.
    fn tower_is_consistent(&self) -> bool {
        let [c0, c1] = C::FQ2_MODULUS_COEFFS;
        let u = Fq2::<C>::from_vec(vec![Fq::zero(), Fq::one()]);
        let e = self.twist.embed(&u);
        let c0 = Fq12::from_base(Fq::from_i64(c0));
        let c1 = Fq12::from_base(Fq::from_i64(c1));
        (e.square() + &(c1 * &e) + &c0).is_zero()
    }

    /// Curve name, e.g. `bls12_381`.
    pub fn name(&self) -> &'static str {
        self.constants.name
    }

    /// The base field prime p.
    pub fn field_modulus(&self) -> &'static BigUint {
        C::modulus()
    }

    /// The prime order r of G1 and G2.
    pub fn curve_order(&self) -> &BigUint {
        &self.curve_order
    }

    /// Curve constant over Fq.
    pub fn b(&self) -> &Fq<C> {
        &self.b
    }

    /// Curve constant of the twist over Fq2.
    pub fn b2(&self) -> &Fq2<C> {
        &self.b2
    }

    /// Curve constant over Fq12.
    pub fn b12(&self) -> &Fq12<C> {
        &self.b12
    }

    /// Generator of G1.
    pub fn g1(&self) -> &G1<C> {
        &self.g1
    }

    /// Generator of G2.
    pub fn g2(&self) -> &G2<C> {
        &self.g2
    }

    /// The G2 generator mapped into Fq12.
    pub fn g12(&self) -> &G12<C> {
        &self.g12
    }

    /// Identity of G1.
    pub fn z1(&self) -> G1<C> {
        Point::Infinity
    }

    /// Identity of G2.
    pub fn z2(&self) -> G2<C> {
        Point::Infinity
    }

    /// The twist isomorphism of this curve.
    pub fn twist_map(&self) -> &Twist<C> {
        &self.twist
    }

    /// Maps a G2 point into Fq12.
    pub fn twist(&self, p: &G2<C>) -> G12<C> {
        self.twist.apply(p)
    }

    /// |x|, the Miller loop count.
    pub fn ate_loop_count(&self) -> u64 {
        self.constants.ate_loop_count
    }

    /// (p¹² − 1) / r.
    pub fn final_exponent(&self) -> &BigUint {
        &self.final_exponent
    }

    /// Uniformly random scalar in [1, r).
    pub fn random_scalar<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_range(&BigUint::one(), &self.curve_order)
    }
}

fn fq2_from_bytes<C: FieldConfig>(
    coeffs: &[[u8; FIELD_ELEMENT_SIZE]; 2],
) -> Result<Fq2<C>> {
    Fq2::from_coeffs(vec![
        Fq::from_canonical_bytes(&coeffs[0])?,
        Fq::from_canonical_bytes(&coeffs[1])?,
    ])
}

/// Miller-Rabin over a fixed set of small prime bases.
pub(crate) fn is_probable_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    for base in MILLER_RABIN_BASES {
        if n % base == BigUint::zero() {
            return *n == BigUint::from(base);
        }
    }

    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for base in MILLER_RABIN_BASES {
        let mut x = BigUint::from(base).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
