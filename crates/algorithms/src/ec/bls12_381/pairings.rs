//! The optimal Ate pairing on BLS12-381.
//!
//! G2 points live on the twist E'(Fp2). Line functions are evaluated on the
//! untwisted image of the accumulator in E(Fp12), with the G1 argument
//! embedded into Fp12, so every line value is a full Fp12 element.
//!
//! The loop count is |x| for the BLS parameter x and no conjugation is
//! applied for its sign, so the result is e(P, Q)^-1 relative to the
//! conventional definition. Bilinearity and non-degeneracy are unaffected,
//! and verification only ever compares products against one.

use alloc::vec::Vec;

use super::curve::{inv, AffinePoint, CurveParams};
use super::field::{Field, Fp, Fp12, Fp2, Fp6};
use super::g1::{G1Affine, G1Curve, G1Projective};
use super::g2::{G2Affine, G2Projective};
use super::BLS_X;
use crate::error::{validate, Result};

/// E: y^2 = x^3 + 4 with coordinates in Fp12, the home of untwisted G2 points
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fp12Curve;

impl CurveParams for Fp12Curve {
    type Base = Fp12;

    const NAME: &'static str = "E(Fp12)";

    const A: Fp12 = Fp12::zero();

    const B: Fp12 = Fp12::new(
        Fp6::new(
            Fp2::new(<G1Curve as CurveParams>::B, Fp::zero()),
            Fp2::zero(),
            Fp2::zero(),
        ),
        Fp6::zero(),
    );
}

/// ξ^-1 = (1 + u)^-1
const XI_INV: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x1804_0000_0001_5554,
        0x8550_0005_3ab0_0001,
        0x633c_b57c_253c_276f,
        0x6e22_d1ec_31eb_b502,
        0xd391_6126_f2d1_4ca2,
        0x17fb_b857_1a00_6596,
    ]),
    c1: Fp::from_raw_unchecked([
        0xa1fa_ffff_fffe_5557,
        0x995b_fff9_76a3_fffe,
        0x03f4_1d24_d174_ceb4,
        0xf654_7998_c199_5dbd,
        0x778a_468f_507a_6034,
        0x0205_5993_1f7f_8103,
    ]),
};

/// (q^4 - q^2 + 1) / n, the hard part of the final exponent
const FINAL_EXP: [u64; 20] = [
    0xe516_c3f4_38e3_ba79,
    0xfa99_12aa_e208_ccf1,
    0x905c_e937_335d_5b68,
    0xc71a_2629_b0de_a236,
    0x8377_4940_9967_54c8,
    0x21d1_60ae_b6a1_e799,
    0x2ed0_b283_ed23_7db4,
    0x915c_97f3_6c6f_1821,
    0x67f1_7fcb_de78_3765,
    0x2378_b903_9096_d1b7,
    0x7988_f876_1bdc_51dc,
    0x2076_9950_03fc_77a1,
    0x827e_ca0b_a621_315b,
    0xe5a7_2bce_8d63_cb9f,
    0xf68f_7764_c28b_6f8a,
    0x2f23_0063_cf08_1517,
    0x9450_6632_528d_6a9a,
    0xd3cd_e88e_eb99_6ca3,
    0xc0bd_38c3_195c_899e,
    0x000f_686b_3d80_7d01,
];

/// w^2 = v
fn w2() -> Fp12 {
    Fp12::new(Fp6::new(Fp2::zero(), Fp2::one(), Fp2::zero()), Fp6::zero())
}

/// w^3 = v·w
fn w3() -> Fp12 {
    Fp12::new(Fp6::zero(), Fp6::new(Fp2::zero(), Fp2::one(), Fp2::zero()))
}

/// Carry a point of the twist onto E(Fp12): (x / w^2, y / w^3).
///
/// With w^6 = ξ, 1/w^2 = v^2/ξ and 1/w^3 = v·w/ξ, so both coordinates
/// land in a single Fp2 slot.
pub fn untwist(q: &G2Affine) -> AffinePoint<Fp12Curve> {
    if q.is_identity() {
        return AffinePoint::identity();
    }

    let x = Fp12::new(
        Fp6::new(Fp2::zero(), Fp2::zero(), q.x * XI_INV),
        Fp6::zero(),
    );
    let y = Fp12::new(
        Fp6::zero(),
        Fp6::new(Fp2::zero(), q.y * XI_INV, Fp2::zero()),
    );
    AffinePoint::from_xy(x, y)
}

/// Inverse of [`untwist`]: (x·w^2, y·w^3)
pub fn twist(p: &AffinePoint<Fp12Curve>) -> AffinePoint<Fp12Curve> {
    if p.is_identity() {
        return AffinePoint::identity();
    }
    AffinePoint::from_xy(p.x * w2(), p.y * w3())
}

/// Embed a G1 point into E(Fp12)
pub fn embed_g1(p: &G1Affine) -> AffinePoint<Fp12Curve> {
    if p.is_identity() {
        return AffinePoint::identity();
    }
    AffinePoint::from_xy(Fp12::from(p.x), Fp12::from(p.y))
}

/// Value at `p` of the line through `point` with slope `slope`
#[inline]
fn line_at(p: &G1Affine, point: &AffinePoint<Fp12Curve>, slope: &Fp12) -> Fp12 {
    let v = point.y - point.x * slope;
    Fp12::from(p.y) - Fp12::from(p.x) * slope - v
}

/// Tangent line at `r`, evaluated at `p`
pub fn double_line_eval(r: &G2Affine, p: &G1Affine) -> Fp12 {
    let r12 = untwist(r);
    let x2 = r12.x.square();
    let slope = (x2.double() + x2) * inv(&r12.y.double());
    line_at(p, &r12, &slope)
}

/// Line through `r` and `q`, evaluated at `p`. When r = -q the line is
/// vertical and its value is p.x - r.x.
pub fn add_line_eval(r: &G2Affine, q: &G2Affine, p: &G1Affine) -> Fp12 {
    let r12 = untwist(r);
    let q12 = untwist(q);
    if r12 == q12.negate() {
        return Fp12::from(p.x) - r12.x;
    }

    let slope = (q12.y - r12.y) * inv(&(q12.x - r12.x));
    line_at(p, &r12, &slope)
}

/// Miller loop for loop count `t`, consuming the bits of `t` below its
/// most significant one
pub fn miller_loop(t: u64, p: &G1Affine, q: &G2Affine) -> Fp12 {
    let mut r = *q;
    let mut f = Fp12::one();

    let bits = 64 - t.leading_zeros();
    for i in (0..bits.saturating_sub(1)).rev() {
        f = f.square() * double_line_eval(&r, p);
        r = r.double();
        if (t >> i) & 1 == 1 {
            f *= add_line_eval(&r, q, p);
            r = r.add(q);
        }
    }
    f
}

/// Raise a Miller loop output to (q^12 - 1) / n.
///
/// The easy part q^6 - 1 becomes a Frobenius and an inversion; q^2 + 1 a
/// second Frobenius; only the hard part is a plain exponentiation.
pub fn final_exponentiation(f: &Fp12) -> Fp12 {
    let mut ans = f.pow_vartime(&FINAL_EXP);
    ans = ans.frobenius_map(2) * ans;
    ans.frobenius_map(6) * inv(&ans)
}

fn miller_loop_pair(p: &G1Projective, q: &G2Projective) -> Fp12 {
    if p.is_identity() || q.is_identity() {
        return Fp12::one();
    }
    miller_loop(BLS_X, &p.to_affine(), &q.to_affine())
}

/// e(P, Q)
pub fn ate_pairing(p: &G1Projective, q: &G2Projective) -> Fp12 {
    final_exponentiation(&miller_loop_pair(p, q))
}

/// Product of e(P_i, Q_i) with a single shared final exponentiation
#[tracing::instrument(skip_all, name = "pairings::ate_pairing_multi", fields(len = ps.len()))]
pub fn ate_pairing_multi(ps: &[G1Projective], qs: &[G2Projective]) -> Result<Fp12> {
    validate::length("ate_pairing_multi", qs.len(), ps.len())?;

    let loops: Vec<Fp12> = ps
        .iter()
        .zip(qs.iter())
        .map(|(p, q)| miller_loop_pair(p, q))
        .collect();
    let prod = loops.iter().fold(Fp12::one(), |acc, f| acc * f);
    Ok(final_exponentiation(&prod))
}
