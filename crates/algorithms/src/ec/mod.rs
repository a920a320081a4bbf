//! Elliptic curve group law and the sextic twist map.
//!
//! [`Point`] implements the short Weierstrass group law y² = x³ + b once,
//! generically over any [`FieldElement`](crate::field::FieldElement), so the
//! same code serves G1 over Fq, G2 over Fq2 and the untwisted G2 over Fq12.
//!
//! None of these operations run in constant time.

mod point;
mod twist;


pub use point::Point;
pub use twist::Twist;
pub use blscurve_params::TwistType;
