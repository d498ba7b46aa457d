//! Simplified SWU map to the curve E2' that is 3-isogenous to G2
//! (RFC 9380, section 6.6.2), with the square root taken by a single
//! exponentiation and a table lookup.

use crate::ec::bls12_381::curve::{CurveParams, JacobianPoint};
use crate::ec::bls12_381::field::{Fp, Fp2};
use crate::error::{Error, Result};

/// E2': y^2 = x^3 + 240u·x + 1012(1 + u)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Iso3Curve;

impl CurveParams for Iso3Curve {
    type Base = Fp2;

    const NAME: &'static str = "E2'";

    const A: Fp2 = ELL2P_A;

    const B: Fp2 = ELL2P_B;
}

/// Coefficient a = 240u of E2'
pub(crate) const ELL2P_A: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ]),
    c1: Fp::from_raw_unchecked([
        0xe53a_0000_0313_5242,
        0x0108_0c0f_def8_0285,
        0xe788_9edb_e340_f6bd,
        0x0b51_3751_2631_0601,
        0x02d6_9857_17c7_44ab,
        0x1220_b4e9_79ea_5467,
    ]),
};

/// Coefficient b = 1012(1 + u) of E2'
pub(crate) const ELL2P_B: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x22ea_0000_0cf8_9db2,
        0x6ec8_32df_7138_0aa4,
        0x6e1b_9440_3db5_a66e,
        0x75bf_3c53_a794_73ba,
        0x3dd3_a569_412c_0a34,
        0x125c_db5e_74dc_4fd1,
    ]),
    c1: Fp::from_raw_unchecked([
        0x22ea_0000_0cf8_9db2,
        0x6ec8_32df_7138_0aa4,
        0x6e1b_9440_3db5_a66e,
        0x75bf_3c53_a794_73ba,
        0x3dd3_a569_412c_0a34,
        0x125c_db5e_74dc_4fd1,
    ]),
};

/// Z = -(2 + u), the SWU non-square
const XI_2: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x87eb_ffff_fff9_555c,
        0x656f_ffe5_da8f_fffa,
        0x0fd0_7493_45d3_3ad2,
        0xd951_e663_0665_76f4,
        0xde29_1a3d_41e9_80d3,
        0x0815_664c_7dfe_040d,
    ]),
    c1: Fp::from_raw_unchecked([
        0x43f5_ffff_fffc_aaae,
        0x32b7_fff2_ed47_fffd,
        0x07e8_3a49_a2e9_9d69,
        0xeca8_f331_8332_bb7a,
        0xef14_8d1e_a0f4_c069,
        0x040a_b326_3eff_0206,
    ]),
};

/// (q^2 - 9) / 16
const SQRT_CANDIDATE_EXP: [u64; 12] = [
    0xb26a_a000_01c7_18e3,
    0xd7ce_d6b1_d763_82ea,
    0x3162_c338_3621_13cf,
    0x966b_f91e_d3e7_1b74,
    0xb292_e85a_8709_1a04,
    0x11d6_8619_c861_85c7,
    0xef53_1493_3097_8ef0,
    0x050a_62cf_d16d_dca6,
    0x466e_59e4_9349_e8bd,
    0x9e2d_c90e_50e7_046b,
    0x74bd_278e_aa22_f25e,
    0x002a_437a_4b8c_35fc,
];

/// Eighth roots of unity 1, u and (1 ± u)/sqrt(2), used to adjust the
/// square-root candidate
const ROOTS_OF_UNITY: [Fp2; 4] = [
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x7609_0000_0002_fffd,
            0xebf4_000b_c40c_0002,
            0x5f48_9857_53c7_58ba,
            0x77ce_5853_7052_5745,
            0x5c07_1a97_a256_ec6d,
            0x15f6_5ec3_fa80_e493,
        ]),
        c1: Fp::from_raw_unchecked([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
            0x0000_0000_0000_0000,
        ]),
        c1: Fp::from_raw_unchecked([
            0x7609_0000_0002_fffd,
            0xebf4_000b_c40c_0002,
            0x5f48_9857_53c7_58ba,
            0x77ce_5853_7052_5745,
            0x5c07_1a97_a256_ec6d,
            0x15f6_5ec3_fa80_e493,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x7bcf_a7a2_5aa3_0fda,
            0xdc17_dec1_2a92_7e7c,
            0x2f08_8dd8_6b4e_bef1,
            0xd1ca_2087_da74_d4a7,
            0x2da2_5966_96ce_bc1d,
            0x0e2b_7eed_bbfd_87d2,
        ]),
        c1: Fp::from_raw_unchecked([
            0x7bcf_a7a2_5aa3_0fda,
            0xdc17_dec1_2a92_7e7c,
            0x2f08_8dd8_6b4e_bef1,
            0xd1ca_2087_da74_d4a7,
            0x2da2_5966_96ce_bc1d,
            0x0e2b_7eed_bbfd_87d2,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x7bcf_a7a2_5aa3_0fda,
            0xdc17_dec1_2a92_7e7c,
            0x2f08_8dd8_6b4e_bef1,
            0xd1ca_2087_da74_d4a7,
            0x2da2_5966_96ce_bc1d,
            0x0e2b_7eed_bbfd_87d2,
        ]),
        c1: Fp::from_raw_unchecked([
            0x3e2f_585d_a55c_9ad1,
            0x4294_213d_86c1_8183,
            0x3828_44c8_8b62_3732,
            0x92ad_2afd_1910_3e18,
            0x1d79_4e4f_ac7c_f0b9,
            0x0bd5_92fc_7d82_5ec8,
        ]),
    },
];

/// Square-root adjustments for the g(x1) branch, derived from Z^3
const ETAS: [Fp2; 4] = [
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x05e5_1466_8ac7_36d2,
            0x9089_b4d6_b84f_3ea5,
            0x603c_384c_224a_8b32,
            0xf325_7909_536a_fea6,
            0x5c5c_dbab_ae65_6d81,
            0x075b_fa08_63c9_87e9,
        ]),
        c1: Fp::from_raw_unchecked([
            0x338d_9bfe_0808_7330,
            0x7b8e_48b2_bd83_cefe,
            0x530d_ad5d_306b_5be7,
            0x5a4d_7e8e_6c40_8b6d,
            0x6258_f7a6_232c_ab9b,
            0x0b98_5811_cce1_4db5,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x8671_6401_f7f7_377b,
            0xa31d_b74b_f3d0_3101,
            0x1423_2543_c645_9a3c,
            0x0a29_ccf6_8744_8752,
            0xe8c2_b010_201f_013c,
            0x0e68_b9d8_6c9e_98e4,
        ]),
        c1: Fp::from_raw_unchecked([
            0x05e5_1466_8ac7_36d2,
            0x9089_b4d6_b84f_3ea5,
            0x603c_384c_224a_8b32,
            0xf325_7909_536a_fea6,
            0x5c5c_dbab_ae65_6d81,
            0x075b_fa08_63c9_87e9,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0x718f_dad2_4ee1_d90f,
            0xa58c_025b_ed82_76af,
            0x0c3a_1023_0ab7_976f,
            0xf0c5_4df5_c8f2_75e1,
            0x4ec2_478c_28ba_f465,
            0x1129_373a_90c5_08e6,
        ]),
        c1: Fp::from_raw_unchecked([
            0x019a_f5f9_80a3_680c,
            0x4ed7_da0e_6606_3afa,
            0x6003_5472_3b5d_9972,
            0x8b2f_958b_20d0_9d72,
            0x0474_938f_02d4_61db,
            0x0dcf_8b9e_0684_ab1c,
        ]),
    },
    Fp2 {
        c0: Fp::from_raw_unchecked([
            0xb864_0a06_7f5c_429f,
            0xcfd4_25f0_4b4d_c505,
            0x072d_7e2e_bb53_5cb1,
            0xd947_b5f9_d2b4_754d,
            0x46a7_1427_4077_4afb,
            0x0c31_864c_32fb_3b7e,
        ]),
        c1: Fp::from_raw_unchecked([
            0x718f_dad2_4ee1_d90f,
            0xa58c_025b_ed82_76af,
            0x0c3a_1023_0ab7_976f,
            0xf0c5_4df5_c8f2_75e1,
            0x4ec2_478c_28ba_f465,
            0x1129_373a_90c5_08e6,
        ]),
    },
];

/// Map a field element to a point on E2'.
///
/// Returns a Jacobian point (x_num·x_den : y·x_den^3 : x_den). The second
/// branch always succeeds for a valid field element, so the error case is an
/// internal invariant violation.
pub fn osswu2_help(t: &Fp2) -> Result<JacobianPoint<Iso3Curve>> {
    let t2 = t.square();
    let num_den_common = XI_2.square() * t2.square() + XI_2 * t2;

    let x0_num = ELL2P_B * (num_den_common + Fp2::one());
    let mut x0_den = -(ELL2P_A * num_den_common);
    if bool::from(x0_den.is_zero()) {
        x0_den = ELL2P_A * XI_2;
    }

    // g(x0) as a fraction gx0_num / gx0_den
    let x0_den2 = x0_den.square();
    let gx0_den = x0_den2 * x0_den;
    let gx0_num = ELL2P_B * gx0_den + ELL2P_A * x0_num * x0_den2 + x0_num.square() * x0_num;

    let mut temp1 = gx0_den.pow_vartime(&[7]);
    let temp2 = gx0_num * temp1;
    temp1 = temp1 * temp2 * gx0_den;
    let sqrt_candidate = temp2 * temp1.pow_vartime(&SQRT_CANDIDATE_EXP);

    let sign_t = bool::from(t.sgn0());
    let finish = |x_num: Fp2, y: Fp2| {
        let y = if bool::from(y.sgn0()) != sign_t { -y } else { y };
        JacobianPoint::new(x_num * x0_den, y * gx0_den, x0_den)
    };

    for root in ROOTS_OF_UNITY.iter() {
        let y0 = sqrt_candidate * root;
        if y0.square() * gx0_den == gx0_num {
            return Ok(finish(x0_num, y0));
        }
    }

    // g(x0) is not square, so g(x1) with x1 = Z·t^2·x0 is
    let x1_num = XI_2 * t2 * x0_num;
    let t3 = t2 * t;
    let gx1_num = XI_2.square() * XI_2 * t3.square() * gx0_num;
    let sqrt_candidate = sqrt_candidate * t3;

    for eta in ETAS.iter() {
        let y1 = eta * sqrt_candidate;
        if y1.square() * gx0_den == gx1_num {
            return Ok(finish(x1_num, y1));
        }
    }

    Err(Error::Processing {
        operation: "osswu2_help",
        details: "no square root on either branch",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_of_unity() {
        for root in ROOTS_OF_UNITY.iter() {
            assert_eq!(root.square().square().square(), Fp2::one());
        }
        assert_eq!(XI_2, -Fp2::new(Fp::from_u64(2), Fp::one()));
    }

    #[test]
    fn test_maps_onto_isogenous_curve() {
        for i in 0..8u64 {
            let t = Fp2::new(Fp::from_u64(i * 7 + 1), Fp::from_u64(i * i + 3));
            let p = osswu2_help(&t).unwrap();
            assert!(p.is_on_curve());
            assert_eq!(bool::from(p.to_affine().y.sgn0()), bool::from(t.sgn0()));
        }
    }

    #[test]
    fn test_zero_input_uses_exceptional_denominator() {
        let p = osswu2_help(&Fp2::zero()).unwrap();
        assert_eq!(p.z, ELL2P_A * XI_2);
        assert!(p.is_on_curve());
    }
}
