//! Property-based tests for the curve group law and the twist map

use blscurve_algorithms::curve::{Bls12_381, G1};
use blscurve_tests::{scalar, BLS12_377, BLS12_381};
use proptest::prelude::*;

fn g1_point(k: u64) -> G1<Bls12_381> {
    BLS12_381.g1().multiply_u64(k)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn double_preserves_curve(k in 1u64..) {
        let p = g1_point(k);
        prop_assert!(p.double().is_on_curve(BLS12_381.b()));
    }

    #[test]
    fn infinity_is_identity(k in 0u64..) {
        let p = g1_point(k);
        let z = BLS12_381.z1();
        prop_assert_eq!(p.add(&z), p.clone());
        prop_assert_eq!(z.add(&p), p);
    }

    #[test]
    fn point_plus_negation_is_infinity(k in 0u64..) {
        let p = g1_point(k);
        prop_assert!(p.add(&p.neg()).is_inf());
        prop_assert_eq!(p.neg().neg(), p);
    }

    #[test]
    fn multiply_preserves_curve(bytes in any::<[u8; 32]>()) {
        let n = scalar(&bytes);
        prop_assert!(BLS12_381.g1().multiply(&n).is_on_curve(BLS12_381.b()));
    }

    #[test]
    fn multiply_is_reduced_mod_order(bytes in any::<[u8; 32]>()) {
        let n = scalar(&bytes);
        let r = BLS12_381.curve_order();
        let g1 = BLS12_381.g1();
        prop_assert_eq!(g1.multiply(&(&n + r)), g1.multiply(&(&n % r)));
    }

    #[test]
    fn addition_is_associative(a in 1u64.., b in 1u64.., c in 1u64..) {
        let (pa, pb, pc) = (g1_point(a), g1_point(b), g1_point(c));
        prop_assert_eq!(pa.add(&pb).add(&pc), pa.add(&pb.add(&pc)));
        prop_assert_eq!(pa.add(&pb), pb.add(&pa));
    }

    #[test]
    fn multiply_distributes_over_scalars(a in any::<u64>(), b in any::<u64>()) {
        let g1 = BLS12_381.g1();
        let sum = scalar(&a.to_be_bytes()) + scalar(&b.to_be_bytes());
        prop_assert_eq!(g1.multiply_u64(a).add(&g1.multiply_u64(b)), g1.multiply(&sum));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn g2_group_law(a in 1u64..1_000_000, b in 1u64..1_000_000) {
        let g2 = BLS12_381.g2();
        let (qa, qb) = (g2.multiply_u64(a), g2.multiply_u64(b));

        prop_assert!(qa.is_on_curve(BLS12_381.b2()));
        prop_assert!(qa.double().is_on_curve(BLS12_381.b2()));
        prop_assert_eq!(qa.add(&qb), g2.multiply_u64(a + b));
        prop_assert!(qa.add(&qa.neg()).is_inf());
    }

    #[test]
    fn twist_lands_on_curve(a in 1u64..1_000_000) {
        let q = BLS12_381.g2().multiply_u64(a);
        let t = BLS12_381.twist(&q);
        prop_assert!(t.is_on_curve(BLS12_381.b12()));
        prop_assert_eq!(t, BLS12_381.g12().multiply_u64(a));

        let q = BLS12_377.g2().multiply_u64(a);
        prop_assert!(BLS12_377.twist(&q).is_on_curve(BLS12_377.b12()));
    }

    #[test]
    fn bls12_377_group_law(a in 1u64.., b in 1u64..) {
        let g1 = BLS12_377.g1();
        let (pa, pb) = (g1.multiply_u64(a), g1.multiply_u64(b));

        prop_assert!(pa.is_on_curve(BLS12_377.b()));
        prop_assert_eq!(pa.add(&pb), pb.add(&pa));
        prop_assert!(pa.add(&pa.neg()).is_inf());
    }
}
