//! BLS12-381: M-type twist, ξ = 1 + u.

use blscurve_params::{CurveConstants, BLS12_381};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

use super::NamedCurve;
use crate::field::FieldConfig;

static MODULUS: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&BLS12_381.field_modulus));

/// Marker type selecting the BLS12-381 field tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12_381;

impl FieldConfig for Bls12_381 {
    const NAME: &'static str = BLS12_381.name;
    const FQ2_MODULUS_COEFFS: [i64; 2] = BLS12_381.fq2_modulus_coeffs;
    const FQ12_MODULUS_COEFFS: [i64; 12] = BLS12_381.fq12_modulus_coeffs;

    fn modulus() -> &'static BigUint {
        &MODULUS
    }
}

impl NamedCurve for Bls12_381 {
    const CONSTANTS: CurveConstants = BLS12_381;
}
