//! G₂ group implementation for BLS12-381.

use alloc::string::String;

use rand_core::RngCore;
use subtle::Choice;

use super::curve::{AffinePoint, CurveParams, GroupParams, JacobianPoint};
use super::field::fp::{Fp, FP_BYTES};
use super::field::fp2::Fp2;
use super::Scalar;
use crate::error::Result;

/// Serialized size of a compressed G₂ point
pub const G2_BYTES: usize = 2 * FP_BYTES;

/// E': y^2 = x^3 + 4(u + 1) over Fp2, the sextic twist of E
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct G2Curve;

/// G₂ affine point representation.
pub type G2Affine = AffinePoint<G2Curve>;

/// G₂ Jacobian point representation.
pub type G2Projective = JacobianPoint<G2Curve>;

impl CurveParams for G2Curve {
    type Base = Fp2;

    const NAME: &'static str = "G2";

    const A: Fp2 = Fp2::zero();

    // 4(u + 1)
    const B: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
            0xaa27_0000_000c_fff3,
            0x53cc_0032_fc34_000a,
            0x478f_e97a_6b0a_807f,
            0xb1d3_7ebe_e6ba_24d7,
            0x8ec9_733b_bf78_ab2f,
            0x09d6_4551_3d83_de7e,
        ]),
        c1: Fp::from_raw_unchecked([
            0xaa27_0000_000c_fff3,
            0x53cc_0032_fc34_000a,
            0x478f_e97a_6b0a_807f,
            0xb1d3_7ebe_e6ba_24d7,
            0x8ec9_733b_bf78_ab2f,
            0x09d6_4551_3d83_de7e,
        ]),
    };
}

impl GroupParams for G2Curve {
    const GENERATOR_X: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
            0xf5f2_8fa2_0294_0a10,
            0xb3f5_fb26_87b4_961a,
            0xa1a8_93b5_3e2a_e580,
            0x9894_999d_1a3c_aee9,
            0x6f67_b763_1863_366b,
            0x0581_9192_4350_bcd7,
        ]),
        c1: Fp::from_raw_unchecked([
            0xa5a9_c075_9e23_f606,
            0xaaa0_c59d_bccd_60c3,
            0x3bb1_7e18_e286_7806,
            0x1b1a_b6cc_8541_b367,
            0xc2b6_ed0e_f215_8547,
            0x1192_2a09_7360_edf3,
        ]),
    };

    const GENERATOR_Y: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
            0x4c73_0af8_6049_4c4a,
            0x597c_fa1f_5e36_9c5a,
            0xe7e6_856c_aa0a_635a,
            0xbbef_b5e9_6e0d_495f,
            0x07d3_a975_f0ef_25a2,
            0x0083_fd8e_7e80_dae5,
        ]),
        c1: Fp::from_raw_unchecked([
            0xadc0_fc92_df64_b05d,
            0x18aa_270a_2b14_61dc,
            0x86ad_ac6a_3be4_eba0,
            0x7949_5c4e_c93d_a33a,
            0xe717_5850_a43c_caed,
            0x0b2b_c2a1_63de_1bf2,
        ]),
    };
}

/// Compression sign of an Fp2 element: the sign of c1, or of c0 when c1 is zero
pub fn sign_fq2(element: &Fp2) -> Choice {
    element.lexicographically_largest()
}

impl G2Projective {
    /// Serialize to the 96-byte compressed form
    pub fn to_bytes(&self) -> [u8; G2_BYTES] {
        let mut out = [0u8; G2_BYTES];
        self.write_compressed(&mut out);
        out
    }

    /// Deserialize from the 96-byte compressed form
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
