//! Constants for BLS12-381
//!
//! E: y² = x³ + 4 over Fq, E': y² = x³ + 4(1 + u) over Fq2 = Fq[u]/(u² + 1).
//! Fq12 = Fq[w]/(w¹² − 2w⁶ + 2), so w⁶ = 1 + u.

use super::{CurveConstants, TwistType};
use hex_literal::hex;

/// BLS parameter |x| = 0xd201000000010000
pub const BLS12_381_X: u64 = 0xd201_0000_0001_0000;

/// BLS12-381 parameters
pub const BLS12_381: CurveConstants = CurveConstants {
    name: "bls12_381",
    field_modulus: hex!("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab"),
    curve_order: hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001"),
    b: 4,
    b2: [
        hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004"),
        hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004"),
    ],
    g1: [
        hex!("17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb"),
        hex!("08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"),
    ],
    g2_x: [
        hex!("024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8"),
        hex!("13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e"),
    ],
    g2_y: [
        hex!("0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801"),
        hex!("0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be"),
    ],
    fq2_modulus_coeffs: [1, 0],
    fq12_modulus_coeffs: [2, 0, 0, 0, 0, 0, -2, 0, 0, 0, 0, 0],
    xi_c0: 1,
    twist: TwistType::M,
    ate_loop_count: BLS12_381_X,
};
