//! # blscurve
//!
//! Pairing-friendly elliptic curve arithmetic for the BLS12 family.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blscurve = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`blscurve-params`]: Raw constants of the named curves
//! - [`blscurve-algorithms`]: Field tower, group law, twist and pairing
//!
//! ## Example
//!
//! ```
//! use blscurve::prelude::*;
//!
//! let params = Bls12_381::params()?;
//! let g1 = params.g1();
//! let g12 = params.twist(params.g2());
//!
//! assert!(g1.multiply(params.curve_order()).is_inf());
//! assert!(g12.is_on_curve(params.b12()));
//! # Ok::<(), blscurve::algorithms::Error>(())
//! ```

#![forbid(unsafe_code)]

pub use blscurve_algorithms as algorithms;
pub use blscurve_params as params;

/// Common imports for blscurve users
pub mod prelude {
    // Re-export error types
    pub use crate::algorithms::{Error, Result};

    // Re-export core traits
    pub use crate::algorithms::{FieldConfig, FieldElement, NamedCurve};

    // Fields, points and parameters
    pub use crate::algorithms::{
        Bls12_377, Bls12_381, CurveParams, Fq, Fq12, Fq2, Point, Twist, TwistType, G1, G12, G2,
    };

    // Pairing
    pub use crate::algorithms::{final_exponentiate, miller_loop, pairing};
}
