//! BLS12-381 pairing-friendly elliptic curve implementation.
//!
//! The base curve E: y^2 = x^3 + 4 over Fp carries G1; its sextic twist
//! E': y^2 = x^3 + 4(u + 1) over Fp2 carries G2. Both share the scalar
//! field of prime order n.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

#[macro_use]
mod macros;

mod arithmetic;
pub mod curve;
pub mod field;
pub mod g1;
pub mod g2;
pub mod hash_to_curve;
pub mod pairings;
pub mod scalar;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod tests;

pub use curve::{AffinePoint, CurveParams, GroupParams, JacobianPoint};
pub use field::{Field, Fp, Fp12, Fp2, Fp6, SqrtField};
pub use g1::{G1Affine, G1Curve, G1Projective};
pub use g2::{G2Affine, G2Curve, G2Projective};
pub use hash_to_curve::{
    expand_message_xmd, expand_message_xof, g2_map, hash_to_field, hp, hp2, iso3, opt_swu2_map,
    osswu2_help, H_EFF,
};
pub use pairings::{
    add_line_eval, ate_pairing, ate_pairing_multi, double_line_eval, embed_g1,
    final_exponentiation, miller_loop, twist, untwist, Fp12Curve,
};
pub use scalar::Scalar;
pub use self::scalar::Scalar as Bls12_381Scalar;

// BLS curve parameters
/// Absolute value of the BLS parameter x = -0xd201000000010000
pub const BLS_X: u64 = 0xd201_0000_0001_0000;
/// Sign of BLS parameter x
pub const BLS_X_IS_NEGATIVE: bool = true;
