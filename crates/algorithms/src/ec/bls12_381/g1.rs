//! G₁ group implementation for BLS12-381.

use alloc::string::String;

use rand_core::RngCore;
use subtle::Choice;

use super::curve::{AffinePoint, CurveParams, GroupParams, JacobianPoint};
use super::field::fp::{Fp, FP_BYTES};
use super::Scalar;
use crate::error::Result;

/// E: y^2 = x^3 + 4 over Fp
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct G1Curve;

/// G₁ affine point representation.
pub type G1Affine = AffinePoint<G1Curve>;

/// G₁ Jacobian point representation.
pub type G1Projective = JacobianPoint<G1Curve>;

impl CurveParams for G1Curve {
    type Base = Fp;

    const NAME: &'static str = "G1";

    const A: Fp = Fp::zero();

    // Curve parameter b = 4
    const B: Fp = Fp::from_raw_unchecked([
        0xaa27_0000_000c_fff3,
        0x53cc_0032_fc34_000a,
        0x478f_e97a_6b0a_807f,
        0xb1d3_7ebe_e6ba_24d7,
        0x8ec9_733b_bf78_ab2f,
        0x09d6_4551_3d83_de7e,
    ]);
}

impl GroupParams for G1Curve {
    const GENERATOR_X: Fp = Fp::from_raw_unchecked([
        0x5cb3_8790_fd53_0c16,
        0x7817_fc67_9976_fff5,
        0x154f_95c7_143b_a1c1,
        0xf0ae_6acd_f3d0_e747,
        0xedce_6ecc_21db_f440,
        0x1201_7741_9e0b_fb75,
    ]);

    const GENERATOR_Y: Fp = Fp::from_raw_unchecked([
        0xbaac_93d5_0ce7_2271,
        0x8c22_631a_7918_fd8e,
        0xdd59_5f13_5707_25ce,
        0x51ac_5829_5040_5194,
        0x0e1c_8c3f_ad00_59c0,
        0x0bbc_3efc_5008_a26a,
    ]);
}

/// Compression sign of a base field element
pub fn sign_fq(element: &Fp) -> Choice {
    element.lexicographically_largest()
}

impl G1Projective {
    /// Serialize to the 48-byte compressed form
    pub fn to_bytes(&self) -> [u8; FP_BYTES] {
        let mut out = [0u8; FP_BYTES];
        self.write_compressed(&mut out);
        out
    }

    /// Deserialize from the 48-byte compressed form
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::read_compressed(bytes)
    }

    /// Deserialize from hex of the compressed form
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(s)?)
    }

    /// Hex of the compressed form
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Random element of the prime-order subgroup
    pub fn random(rng: impl RngCore) -> Self {
        Self::generator().multiply(&Scalar::random(rng))
    }
}
