//! BLS12-377: D-type twist, ξ = u.

use blscurve_params::{CurveConstants, BLS12_377};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

use super::NamedCurve;
use crate::field::FieldConfig;

static MODULUS: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&BLS12_377.field_modulus));

/// Marker type selecting the BLS12-377 field tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12_377;

impl FieldConfig for Bls12_377 {
    const NAME: &'static str = BLS12_377.name;
    const FQ2_MODULUS_COEFFS: [i64; 2] = BLS12_377.fq2_modulus_coeffs;
    const FQ12_MODULUS_COEFFS: [i64; 12] = BLS12_377.fq12_modulus_coeffs;

    fn modulus() -> &'static BigUint {
        &MODULUS
    }
}

impl NamedCurve for Bls12_377 {
    const CONSTANTS: CurveConstants = BLS12_377;
}
