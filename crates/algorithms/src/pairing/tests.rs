use super::*;
use crate::curve::{Bls12_377, Bls12_381, NamedCurve};
use crate::field::Fq;

#[test]
fn test_line_func_vanishes_on_third_point() {
    let params = Bls12_381::params().unwrap();
    let p1 = params.g1().clone();
    let p2 = params.g1().multiply_u64(3);

    // chord through P1, P2 meets the curve again at −(P1 + P2)
    let third = p1.add(&p2).neg();
    assert!(line_func(&p1, &p2, &third).is_zero());
    assert!(!line_func(&p1, &p2, &p1.double()).is_zero());

    // tangent at P1 meets the curve again at −2·P1
    assert!(line_func(&p1, &p1, &p1.double().neg()).is_zero());

    // vertical line through P1 and −P1
    let t = params.g1().multiply_u64(5);
    let (x1, _) = p1.coords().unwrap();
    let (xt, _) = t.coords().unwrap();
    assert_eq!(line_func(&p1, &p1.neg(), &t), xt.clone() - x1);
}

#[test]
fn test_line_func_infinity_is_trivial() {
    let params = Bls12_381::params().unwrap();
    let g1 = params.g1();
    assert_eq!(line_func(&params.z1(), g1, g1), Fq::one());
    assert_eq!(line_func(g1, g1, &params.z1()), Fq::one());
}

#[test]
fn test_cast_to_fq12() {
    let params = Bls12_381::params().unwrap();
    let p = cast_to_fq12(params.g1());
    assert!(p.is_on_curve(params.b12()));
    assert!(cast_to_fq12(&params.z1()).is_inf());
}

#[test]
fn test_miller_loop_identity() {
    let params = Bls12_381::params().unwrap();
    let p = cast_to_fq12(params.g1());
    let q = params.g12();

    assert_eq!(miller_loop(&Point::Infinity, &p, params.ate_loop_count()), Fq12::one());
    assert_eq!(miller_loop(q, &Point::Infinity, params.ate_loop_count()), Fq12::one());
    assert_eq!(miller_loop(q, &p, 0), Fq12::one());
}

#[test]
fn test_pairing_identity() {
    let params = Bls12_381::params().unwrap();
    assert_eq!(pairing(&params.z2(), params.g1(), &params).unwrap(), Fq12::one());
    assert_eq!(pairing(params.g2(), &params.z1(), &params).unwrap(), Fq12::one());
}

#[test]
fn test_pairing_rejects_off_curve_input() {
    let params = Bls12_381::params().unwrap();
    let (x, y) = params.g1().coords().unwrap();
    let bad = Point::new(x.clone(), y.clone() + &Fq::one());

    assert!(pairing(params.g2(), &bad, &params).is_err());
}

#[test_log::test]
fn test_bls12_381_bilinearity() {
    let params = Bls12_381::params().unwrap();
    let p = params.g1();
    let q = params.g2();

    let e = pairing(q, p, &params).unwrap();
    let e_2q = pairing(&q.double(), p, &params).unwrap();
    let e_2p = pairing(q, &p.double(), &params).unwrap();

    assert_ne!(e, Fq12::one());
    assert_eq!(e_2q, e_2p);
    assert_eq!(e_2q, e.square());
    assert_eq!(e.pow(params.curve_order()), Fq12::one());
}

#[test_log::test]
fn test_bls12_377_bilinearity() {
    let params = Bls12_377::params().unwrap();
    let p = params.g1();
    let q = params.g2();

    let e = pairing(q, p, &params).unwrap();
    let e_neg = pairing(q, &p.neg(), &params).unwrap();

    assert_ne!(e, Fq12::one());
    assert_eq!(e * e_neg, Fq12::one());
}
