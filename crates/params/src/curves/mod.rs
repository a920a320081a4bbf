//! Constants for BLS-family pairing-friendly curves

pub mod bls12_377;
pub mod bls12_381;

pub use bls12_377::BLS12_377;
pub use bls12_381::BLS12_381;

/// Size of an encoded base field element in bytes
pub const FIELD_ELEMENT_SIZE: usize = 48;

/// Size of an encoded group order in bytes
pub const CURVE_ORDER_SIZE: usize = 32;

/// Shape of the sextic twist E' relative to E.
///
/// With w⁶ = ξ in Fq12, an M-type twist has b' = b·ξ and untwists as
/// (x / w², y / w³); a D-type twist has b' = b / ξ and untwists as
/// (x · w², y · w³).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwistType {
    /// Multiplicative twist, b' = b·ξ
    M,
    /// Divisive twist, b' = b/ξ
    D,
}

/// Raw parameters of one named BLS12 curve
#[derive(Debug, Clone, Copy)]
pub struct CurveConstants {
    /// Human readable curve name
    pub name: &'static str,

    /// Base field modulus p
    pub field_modulus: [u8; FIELD_ELEMENT_SIZE],

    /// Prime order r of the pairing subgroups
    pub curve_order: [u8; CURVE_ORDER_SIZE],

    /// Curve constant b of E: y² = x³ + b over Fq
    pub b: u64,

    /// Curve constant b' of the twist over Fq2, as [c0, c1]
    pub b2: [[u8; FIELD_ELEMENT_SIZE]; 2],

    /// Generator of G1 as [x, y]
    pub g1: [[u8; FIELD_ELEMENT_SIZE]; 2],

    /// x coordinate of the G2 generator, as [c0, c1]
    pub g2_x: [[u8; FIELD_ELEMENT_SIZE]; 2],

    /// y coordinate of the G2 generator, as [c0, c1]
    pub g2_y: [[u8; FIELD_ELEMENT_SIZE]; 2],

    /// Fq2 modulus u² + c1·u + c0, as [c0, c1]
    pub fq2_modulus_coeffs: [i64; 2],

    /// Fq12 modulus w¹² + Σ cᵢ·wⁱ, as [c0, ..., c11]
    pub fq12_modulus_coeffs: [i64; 12],

    /// Constant term of ξ = xi_c0 + u, where w⁶ = ξ
    pub xi_c0: i64,

    /// Twist shape
    pub twist: TwistType,

    /// |x|, the BLS parameter driving the Miller loop
    pub ate_loop_count: u64,
}
