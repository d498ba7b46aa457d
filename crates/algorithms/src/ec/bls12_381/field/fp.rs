//! BLS12-381 base field `GF(q)` where q = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::super::arithmetic::{add_mod, lt, mont_mul, mont_reduce, neg_mod, sub_mod};
use super::Field;
use crate::error::{validate, Error, Result};

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus q
pub(crate) const MODULUS: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// INV = -(q^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x89f3_fffc_fffc_fffd;

/// R = 2^384 mod q
const R: Fp = Fp([
    0x7609_0000_0002_fffd,
    0xebf4_000b_c40c_0002,
    0x5f48_9857_53c7_58ba,
    0x77ce_5853_7052_5745,
    0x5c07_1a97_a256_ec6d,
    0x15f6_5ec3_fa80_e493,
]);

/// R^2 = 2^768 mod q
const R2: Fp = Fp([
    0xf4df_1f34_1c34_1746,
    0x0a76_e6a6_09d1_04f1,
    0x8de5_476c_4c95_b6d5,
    0x67eb_88a9_939d_83c0,
    0x9a79_3e85_b519_952d,
    0x1198_8fe5_92ca_e3aa,
]);

/// R^3 = 2^1152 mod q
const R3: Fp = Fp([
    0xed48_ac6b_d94c_a1e0,
    0x315f_831e_03a7_adf8,
    0x9a53_352a_615e_29dd,
    0x34c0_4e5e_921e_1761,
    0x2512_d435_6572_4728,
    0x0aa6_3460_9175_5d4d,
]);

/// (q - 1) / 2, the Euler criterion exponent and the sign threshold
const P_MINUS_1_OVER_2: [u64; 6] = [
    0xdcff_7fff_ffff_d555,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

/// (q + 1) / 4; q = 3 mod 4 so a^((q+1)/4) is a root whenever one exists
const SQRT_EXP: [u64; 6] = [
    0xee7f_bfff_ffff_eaab,
    0x07aa_ffff_ac54_ffff,
    0xd9cc_34a8_3dac_3d89,
    0xd91d_d2e1_3ce1_44af,
    0x92c6_e9ed_90d2_eb35,
    0x0680_447a_8e5f_f9a6,
];

/// q - 2, for inversion by Fermat's little theorem
const INVERT_EXP: [u64; 6] = [
    0xb9fe_ffff_ffff_aaa9,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// Serialized size of a base field element
pub const FP_BYTES: usize = 48;

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod q, with R = 2^384
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 6]);

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Wrap limbs that are already in Montgomery form
    pub const fn from_raw_unchecked(v: [u64; 6]) -> Fp {
        Fp(v)
    }

    /// Embed a small integer
    pub fn from_u64(v: u64) -> Fp {
        Fp([v, 0, 0, 0, 0, 0]) * R2
    }

    /// Canonical (non-Montgomery) limbs, little-endian
    pub(crate) fn to_canonical(self) -> [u64; 6] {
        mont_reduce(&self.0, &MODULUS, INV)
    }

    /// Add two field elements
    #[inline]
    pub fn add(&self, rhs: &Fp) -> Fp {
        Fp(add_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Subtract two field elements
    #[inline]
    pub fn sub(&self, rhs: &Fp) -> Fp {
        Fp(sub_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Negate a field element
    #[inline]
    pub fn neg(&self) -> Fp {
        Fp(neg_mod(&self.0, &MODULUS))
    }

    /// Multiply two field elements
    #[inline]
    pub fn mul(&self, rhs: &Fp) -> Fp {
        Fp(mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    /// Square this element
    #[inline]
    pub fn square(&self) -> Fp {
        self.mul(self)
    }

    /// Double this element
    #[inline]
    pub fn double(&self) -> Fp {
        self.add(self)
    }
}

// ============================================================================
// Advanced Field Operations
// ============================================================================

impl Fp {
    /// Variable-time exponentiation by a little-endian limb exponent
    pub fn pow_vartime(&self, by: &[u64]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res = res.mul(self);
                }
            }
        }
        res
    }

    /// Compute square root if it exists
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        let sqrt = self.pow_vartime(&SQRT_EXP);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Square root, or `NoSquareRoot`
    pub fn try_sqrt(&self) -> Result<Self> {
        Option::from(self.sqrt()).ok_or(Error::NoSquareRoot { context: "Fp" })
    }

    /// Euler's criterion: zero or a quadratic residue
    pub fn is_square(&self) -> Choice {
        let e = self.pow_vartime(&P_MINUS_1_OVER_2);
        e.ct_eq(&Fp::one()) | self.is_zero()
    }

    /// Multiplicative inverse
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        let t = self.pow_vartime(&INVERT_EXP);
        CtOption::new(t, !self.is_zero())
    }

    /// Sign used by the wire format: set when the value exceeds (q-1)/2
    pub fn lexicographically_largest(&self) -> Choice {
        let canonical = self.to_canonical();
        Choice::from(lt(&P_MINUS_1_OVER_2, &canonical) as u8)
    }

    /// Parity of the canonical value, as used by `sgn0`
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical()[0] & 1) as u8)
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from big-endian bytes, rejecting values not below q
    pub fn from_bytes(bytes: &[u8; 48]) -> CtOption<Fp> {
        let mut limbs = [0u64; 6];
        for (limb, chunk) in limbs.iter_mut().rev().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }

        let is_some = Choice::from(lt(&limbs, &MODULUS) as u8);

        // Convert to Montgomery form
        CtOption::new(Fp(limbs) * R2, is_some)
    }

    /// Decode from a big-endian slice of exactly 48 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Fp> {
        validate::length("Fp", bytes.len(), FP_BYTES)?;
        let mut buf = [0u8; FP_BYTES];
        buf.copy_from_slice(bytes);
        Option::from(Fp::from_bytes(&buf)).ok_or(Error::Encoding {
            context: "Fp",
            details: "value is not below the field modulus",
        })
    }

    /// Encode to big-endian bytes
    pub fn to_bytes(self) -> [u8; 48] {
        let tmp = self.to_canonical();

        let mut res = [0u8; 48];
        for (chunk, limb) in res.chunks_exact_mut(8).zip(tmp.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        res
    }

    /// Reduce a 64-byte big-endian string modulo q.
    ///
    /// This is the per-element step of `hash_to_field` with L = 64.
    pub fn from_okm(okm: &[u8; 64]) -> Fp {
        let mut lo = [0u64; 6];
        for (limb, chunk) in lo.iter_mut().rev().zip(okm[16..].chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }

        let mut hi = [0u64; 6];
        for (limb, chunk) in hi[..2].iter_mut().rev().zip(okm[..16].chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }

        // lo * R2 = lo (Montgomery), hi * R3 = hi * 2^384 (Montgomery)
        Fp(lo) * R2 + Fp(hi) * R3
    }

    /// Create random field element
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Fp::from_okm(&bytes)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        for &b in self.to_bytes().iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp {}

impl From<u64> for Fp {
    fn from(v: u64) -> Fp {
        Fp::from_u64(v)
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(Choice::from(1u8), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; 6];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fp(out)
    }
}

impl<'a> Neg for &'a Fp {
    type Output = Fp;

    #[inline]
    fn neg(self) -> Fp {
        Fp::neg(self)
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        Fp::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        Fp::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;

    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        Fp::mul(self, rhs)
    }
}

impl_neg_owned!(Fp);
impl_binops_additive!(Fp, Fp);
impl_binops_multiplicative!(Fp, Fp);

impl Field for Fp {
    const NAME: &'static str = "Fp";

    fn zero() -> Self {
        Fp::zero()
    }

    fn one() -> Self {
        Fp::one()
    }

    fn is_zero(&self) -> Choice {
        Fp::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp::square(self)
    }

    fn double(&self) -> Self {
        Fp::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp::invert(self)
    }

    fn pow_vartime(&self, exp: &[u64]) -> Self {
        Fp::pow_vartime(self, exp)
    }

    fn from_u64(v: u64) -> Self {
        Fp::from_u64(v)
    }
}
