//! Shared fixtures for the blscurve test suites

use blscurve_algorithms::curve::{Bls12_377, Bls12_381, CurveParams, NamedCurve};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// BLS12-381 parameters, validated once per test binary
pub static BLS12_381: Lazy<CurveParams<Bls12_381>> =
    Lazy::new(|| Bls12_381::params().expect("BLS12-381 parameters should be valid"));

/// BLS12-377 parameters, validated once per test binary
pub static BLS12_377: Lazy<CurveParams<Bls12_377>> =
    Lazy::new(|| Bls12_377::params().expect("BLS12-377 parameters should be valid"));

/// Interprets raw bytes as a big-endian scalar
pub fn scalar(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}
