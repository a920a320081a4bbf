//! Curve arithmetic for BLS12 pairing-friendly curves
//!
//! This crate provides the field tower Fq ⊂ Fq2 ⊂ Fq12, the short
//! Weierstrass group law over any level of the tower, the sextic twist that
//! carries G2 points into Fq12, validated curve parameters for BLS12-381 and
//! BLS12-377, and an optimal ate pairing built on top of them.
//!
//! Arithmetic is implemented over arbitrary precision integers and runs in
//! variable time. It is suitable for public values such as signature
//! verification, not for operations on secret scalars in an environment where
//! timing can be observed.
//!
//! ```
//! use blscurve_algorithms::curve::{Bls12_381, NamedCurve};
//!
//! let params = Bls12_381::params().unwrap();
//! let g1 = params.g1();
//! assert_eq!(g1.multiply_u64(3), g1.add(&g1.double()));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Field tower
pub mod field;
pub use field::{FieldConfig, FieldElement, Fq, Fq12, Fq2};

// Group law and twist
pub mod ec;
pub use ec::{Point, Twist, TwistType};

// Named curves and their parameters
pub mod curve;
pub use curve::{Bls12_377, Bls12_381, CurveParams, NamedCurve, G1, G12, G2};

// Pairing
pub mod pairing;
pub use pairing::{final_exponentiate, miller_loop, pairing};
