//! Hashing arbitrary messages onto G2 (RFC 9380, suite
//! `BLS12381G2_XMD:SHA-256_SSWU_RO_`).
//!
//! The pipeline is: expand the message into uniform bytes, reduce them to
//! two Fp2 elements, send each through the simplified SWU map onto the
//! isogenous curve E2', carry both across the 3-isogeny, add them and clear
//! the cofactor with the effective scalar h_eff.

pub mod expand_message;
pub mod hash_to_field;
pub mod iso;
pub mod swu;

pub use expand_message::{expand_message_xmd, expand_message_xof};
pub use hash_to_field::{hash_to_field, hp, hp2, FromOkm};
pub use iso::iso3;
pub use swu::{osswu2_help, Iso3Curve};

use super::field::Fp2;
use super::g2::G2Projective;
use crate::error::Result;

/// Effective cofactor h_eff for G2, little-endian limbs
pub const H_EFF: [u64; 10] = [
    0xe802_0005_aaa9_5551,
    0x5989_4c0a_debb_f6b4,
    0xe954_cbc0_6689_f6a3,
    0x2ec0_ec69_d747_7c1a,
    0x6d82_bf01_5d12_12b0,
    0x329c_2f17_8731_db95,
    0x9986_ff03_1508_ffe1,
    0x88e2_a8e9_145a_d768,
    0x584c_6a0e_a91b_3528,
    0x0bc6_9f08_f2ee_75b3,
];

/// Map two field elements to G2: SWU and the isogeny on each, then clear
/// the cofactor of the sum
pub fn opt_swu2_map(t0: &Fp2, t1: &Fp2) -> Result<G2Projective> {
    let p0 = iso3(&osswu2_help(t0)?);
    let p1 = iso3(&osswu2_help(t1)?);
    Ok((p0 + p1).multiply_limbs(&H_EFF))
}

/// Hash `msg` to a point of the order-n subgroup of G2 under the domain
/// separation tag `dst`
#[tracing::instrument(skip_all, name = "hash_to_curve::g2_map", fields(len = msg.len()))]
pub fn g2_map(msg: &[u8], dst: &[u8]) -> Result<G2Projective> {
    let elements = hp2(msg, 2, dst)?;
    opt_swu2_map(&elements[0], &elements[1])
}
