//! Cross-module tests: aggregation and pairing equations over validated curves

use blscurve_algorithms::curve::{Bls12_377, Bls12_381, G1, G2};
use blscurve_algorithms::field::{FieldElement, Fq12};
use blscurve_algorithms::pairing::pairing;
use blscurve_tests::{BLS12_377, BLS12_381};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_aggregate_equals_multiply_by_sum() {
    let params = &*BLS12_381;
    let mut rng = StdRng::seed_from_u64(0x5eed);

    let scalars: Vec<BigUint> = (0..5).map(|_| params.random_scalar(&mut rng)).collect();
    let g1_parts: Vec<G1<Bls12_381>> = scalars.iter().map(|k| params.g1().multiply(k)).collect();
    let g2_parts: Vec<G2<Bls12_381>> = scalars.iter().map(|k| params.g2().multiply(k)).collect();

    let total = scalars.iter().fold(BigUint::default(), |acc, k| acc + k);

    let g1_sum: G1<Bls12_381> = g1_parts.iter().sum();
    assert_eq!(g1_sum, params.g1().multiply(&total));
    assert!(g1_sum.is_on_curve(params.b()));

    let g2_sum: G2<Bls12_381> = g2_parts.iter().sum();
    assert_eq!(g2_sum, params.g2().multiply(&total));
    assert!(g2_sum.is_on_curve(params.b2()));
}

#[test]
fn test_aggregate_with_cancelling_terms() {
    let params = &*BLS12_377;
    let p = params.g1().multiply_u64(42);
    let parts = [p.clone(), params.g1().clone(), p.neg()];

    let sum: G1<Bls12_377> = parts.iter().sum();
    assert_eq!(&sum, params.g1());
}

#[test_log::test]
fn test_pairing_moves_scalars_between_groups() {
    let params = &*BLS12_381;
    let mut rng = StdRng::seed_from_u64(42);
    let a = params.random_scalar(&mut rng);

    let lhs = pairing(&params.g2().multiply(&a), params.g1(), params).unwrap();
    let rhs = pairing(params.g2(), &params.g1().multiply(&a), params).unwrap();
    assert_eq!(lhs, rhs);
    assert!(!lhs.is_zero());
}

#[test_log::test]
fn test_pairing_product_check() {
    // e(Q, aP) · e(−aQ, P) = 1, the shape of an aggregate signature check
    let params = &*BLS12_377;
    let a = BigUint::from(0xdead_beefu64);

    let e1 = pairing(params.g2(), &params.g1().multiply(&a), params).unwrap();
    let e2 = pairing(&params.g2().multiply(&a).neg(), params.g1(), params).unwrap();
    assert_eq!(e1 * e2, Fq12::<Bls12_377>::one());
}

#[test]
fn test_facade_prelude() {
    use blscurve::prelude::*;

    let params = Bls12_381::params().unwrap();
    let g12: G12<Bls12_381> = params.twist(params.g2());
    assert!(g12.is_on_curve(params.b12()));
    assert_eq!(params.twist_map().kind(), TwistType::M);
}
