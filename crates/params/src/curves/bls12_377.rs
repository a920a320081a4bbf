//! Constants for BLS12-377
//!
//! E: y² = x³ + 1 over Fq, E': y² = x³ + 1/u over Fq2 = Fq[u]/(u² + 5).
//! Fq12 = Fq[w]/(w¹² + 5), so w⁶ = u.

use super::{CurveConstants, TwistType};
use hex_literal::hex;

/// BLS parameter x = 0x8508c00000000001
pub const BLS12_377_X: u64 = 0x8508_c000_0000_0001;

/// BLS12-377 parameters
pub const BLS12_377: CurveConstants = CurveConstants {
    name: "bls12_377",
    field_modulus: hex!("01ae3a4617c510eac63b05c06ca1493b1a22d9f300f5138f1ef3622fba094800170b5d44300000008508c00000000001"),
    curve_order: hex!("12ab655e9a2ca55660b44d1e5c37b00159aa76fed00000010a11800000000001"),
    b: 1,
    b2: [
        hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000"),
        hex!("010222f6db0fd6f343bd03737460c589dc7b4f91cd5fd889129207b63c6bf8000dd39e5c1ccccccd1c9ed9999999999a"),
    ],
    g1: [
        hex!("008848defe740a67c8fc6225bf87ff5485951e2caa9d41bb188282c8bd37cb5cd5481512ffcd394eeab9b16eb21be9ef"),
        hex!("01914a69c5102eff1f674f5d30afeec4bd7fb348ca3e52d96d182ad44fb82305c2fe3d3634a9591afd82de55559c8ea6"),
    ],
    g2_x: [
        hex!("018480be71c785fec89630a2a3841d01c565f071203e50317ea501f557db6b9b71889f52bb53540274e3e48f7c005196"),
        hex!("00ea6040e700403170dc5a51b1b140d5532777ee6651cecbe7223ece0799c9de5cf89984bff76fe6b26bfefa6ea16afe"),
    ],
    g2_y: [
        hex!("00690d665d446f7bd960736bcbb2efb4de03ed7274b49a58e458c282f832d204f2cf88886d8c7c2ef094094409fd4ddf"),
        hex!("00f8169fd28355189e549da3151a70aa61ef11ac3d591bf12463b01acee304c24279b83f5e52270bd9a1cdd185eb8f93"),
    ],
    fq2_modulus_coeffs: [5, 0],
    fq12_modulus_coeffs: [5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    xi_c0: 0,
    twist: TwistType::D,
    ate_loop_count: BLS12_377_X,
};
