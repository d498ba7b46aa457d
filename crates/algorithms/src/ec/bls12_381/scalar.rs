//! BLS12-381 scalar field F_n where n = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::arithmetic::{add_mod, lt, mont_mul, mont_reduce, neg_mod, sub_mod};
use crate::error::{validate, Error, Result};

/// Group order n, little-endian limbs
pub const MODULUS: [u64; 4] = [
    0xffff_ffff_0000_0001,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

/// INV = -(n^{-1} mod 2^64) mod 2^64
const INV: u64 = 0xffff_fffe_ffff_ffff;

/// R = 2^256 mod n
const R: Scalar = Scalar([
    0x0000_0001_ffff_fffe,
    0x5884_b7fa_0003_4802,
    0x998c_4fef_ecbc_4ff5,
    0x1824_b159_acc5_056f,
]);

/// R^2 = 2^512 mod n
const R2: Scalar = Scalar([
    0xc999_e990_f3f2_9c6d,
    0x2b6c_edcb_8792_5c23,
    0x05d3_1496_7254_398f,
    0x0748_d9d9_9f59_ff11,
]);

/// R^3 = 2^768 mod n
const R3: Scalar = Scalar([
    0xc62c_1807_439b_73af,
    0x1b3e_0d18_8cf0_6990,
    0x73d1_3c71_c7b5_f418,
    0x6e2a_5bb9_c8db_33e9,
]);

/// n - 2, for inversion by Fermat's little theorem
const INVERT_EXP: [u64; 4] = [
    0xffff_fffe_ffff_ffff,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
];

/// Serialized size of a scalar
pub const SCALAR_BYTES: usize = 32;

/// Scalar field element of BLS12-381
/// Internal: Four 64-bit limbs in little-endian Montgomery form
#[derive(Clone, Copy, Eq)]
pub struct Scalar(pub(crate) [u64; 4]);

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        for &b in self.to_be_bytes().iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl From<u64> for Scalar {
    fn from(val: u64) -> Scalar {
        Scalar([val, 0, 0, 0]) * R2
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(Choice::from(1u8), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl PartialEq for Scalar {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; 4];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Scalar(out)
    }
}

impl Default for Scalar {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl zeroize::DefaultIsZeroes for Scalar {}

impl Scalar {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Scalar {
        Scalar([0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Scalar {
        R
    }

    /// Check if element is zero.
    #[inline]
    pub fn is_zero(&self) -> Choice {
        (self.0[0] | self.0[1] | self.0[2] | self.0[3]).ct_eq(&0)
    }

    /// Creates a scalar from four `u64` limbs (little-endian), converting
    /// the raw integer into Montgomery form.
    pub fn from_raw(val: [u64; 4]) -> Self {
        Scalar(val) * R2
    }

    /// Canonical little-endian limbs, for use as a scalar-multiplication exponent
    pub fn to_limbs(&self) -> [u64; 4] {
        mont_reduce(&self.0, &MODULUS, INV)
    }

    /// Create from little-endian bytes if canonical
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Scalar> {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }

        let is_some = Choice::from(lt(&limbs, &MODULUS) as u8);

        // Convert to Montgomery: (a * R^2) / R = aR
        CtOption::new(Scalar(limbs) * R2, is_some)
    }

    /// Convert to little-endian bytes
    pub fn to_bytes(&self) -> [u8; 32] {
        let tmp = self.to_limbs();

        let mut res = [0; 32];
        for (chunk, limb) in res.chunks_exact_mut(8).zip(tmp.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        res
    }

    /// Create from a 32-byte big-endian encoding if canonical
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Scalar> {
        validate::length("Scalar", bytes.len(), SCALAR_BYTES)?;
        let mut le = [0u8; SCALAR_BYTES];
        for (dst, src) in le.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        Option::from(Scalar::from_bytes(&le)).ok_or(Error::Encoding {
            context: "Scalar",
            details: "value is not below the group order",
        })
    }

    /// Convert to big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut res = self.to_bytes();
        res.reverse();
        res
    }

    /// Create from 512-bit little-endian integer mod n
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar {
        let mut limbs = [0u64; 8];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }

        let d0 = Scalar([limbs[0], limbs[1], limbs[2], limbs[3]]);
        let d1 = Scalar([limbs[4], limbs[5], limbs[6], limbs[7]]);
        d0 * R2 + d1 * R3
    }

    /// Reduce a big-endian integer of any length mod n
    pub fn from_be_bytes_reduced(bytes: &[u8]) -> Scalar {
        // 2^64 in Montgomery form
        let shift = Scalar::from_raw([0, 1, 0, 0]);
        let head = bytes.len() % 8;

        let mut acc = Scalar::zero();
        let words = core::iter::once(&bytes[..head])
            .filter(|w| !w.is_empty())
            .chain(bytes[head..].chunks_exact(8));
        for word in words {
            let v = word.iter().fold(0u64, |v, b| (v << 8) | u64::from(*b));
            acc = acc * shift + Scalar::from(v);
        }
        acc
    }

    /// Uniformly random scalar
    pub fn random(mut rng: impl RngCore) -> Scalar {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Scalar::from_bytes_wide(&bytes)
    }

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

    /// Multiplicative inverse, none for zero
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.pow_vartime(&INVERT_EXP), !self.is_zero())
    }

    /// Multiplies `rhs` by `self`, returning the result.
    #[inline]
    pub fn mul(&self, rhs: &Self) -> Self {
        Scalar(mont_mul(&self.0, &rhs.0, &MODULUS, INV))
    }

    /// Computes the square of this scalar.
    #[inline]
    pub fn square(&self) -> Scalar {
        self.mul(self)
    }

    /// Double this element
    #[inline]
    pub fn double(&self) -> Scalar {
        self.add(self)
    }

    /// Subtracts `rhs` from `self`, returning the result.
    #[inline]
    pub fn sub(&self, rhs: &Self) -> Self {
        Scalar(sub_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Adds `rhs` to `self`, returning the result.
    #[inline]
    pub fn add(&self, rhs: &Self) -> Self {
        Scalar(add_mod(&self.0, &rhs.0, &MODULUS))
    }

    /// Negates `self`.
    #[inline]
    pub fn neg(&self) -> Self {
        Scalar(neg_mod(&self.0, &MODULUS))
    }
}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn neg(self) -> Scalar {
        Scalar::neg(self)
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        Scalar::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, rhs: &'b Scalar) -> Scalar {
        Scalar::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    #[inline]
    fn mul(self, rhs: &'b Scalar) -> Scalar {
        Scalar::mul(self, rhs)
    }
}

impl_neg_owned!(Scalar);
impl_binops_additive!(Scalar, Scalar);
impl_binops_multiplicative!(Scalar, Scalar);

impl From<Scalar> for [u8; 32] {
    fn from(value: Scalar) -> [u8; 32] {
        value.to_bytes()
    }
}

impl<'a> From<&'a Scalar> for [u8; 32] {
    fn from(value: &'a Scalar) -> [u8; 32] {
        value.to_bytes()
    }
}

impl<T> core::iter::Sum<T> for Scalar
where
    T: core::borrow::Borrow<Scalar>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::zero(), |acc, item| acc + item.borrow())
    }
}

impl<T> core::iter::Product<T> for Scalar
where
    T: core::borrow::Borrow<Scalar>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::one(), |acc, item| acc * item.borrow())
    }
}

// Tests
#[test]
fn test_inv() {
    // Verify INV constant
    let mut inv = 1u64;
    for _ in 0..63 {
        inv = inv.wrapping_mul(inv);
        inv = inv.wrapping_mul(MODULUS[0]);
    }
    inv = inv.wrapping_neg();
    assert_eq!(inv, INV);
}

#[cfg(feature = "std")]
#[test]
fn test_debug() {
    assert_eq!(
        format!("{:?}", Scalar::zero()),
        "0x0000000000000000000000000000000000000000000000000000000000000000"
    );
    // R is the Montgomery form of 1
    assert_eq!(
        format!("{:?}", R),
        "0x0000000000000000000000000000000000000000000000000000000000000001"
    );
}

#[test]
fn test_to_bytes() {
    let mut one = [0u8; 32];
    one[0] = 1;
    assert_eq!(Scalar::one().to_bytes(), one);
    assert_eq!(Scalar::zero().to_bytes(), [0u8; 32]);

    assert_eq!(
        (-&Scalar::one()).to_bytes(),
        [
            0, 0, 0, 0, 255, 255, 255, 255, 254, 91, 254, 255, 2, 164, 189, 83, 5, 216, 161, 9, 8,
            216, 57, 51, 72, 125, 157, 41, 83, 167, 237, 115
        ]
    );
}

#[test]
fn test_from_bytes() {
    let mut a = R2;

    for _ in 0..100 {
        let b = Scalar::from_bytes(&a.to_bytes()).unwrap();
        assert_eq!(a, b);

        let b = Scalar::from_be_bytes(&(-a).to_be_bytes()).unwrap();
        assert_eq!(-a, b);

        a = a.square();
    }

    // n itself is not canonical
    let mut n = [0u8; 32];
    for (chunk, limb) in n.chunks_exact_mut(8).zip(MODULUS.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    assert!(bool::from(Scalar::from_bytes(&n).is_none()));
}

#[cfg(test)]
const LARGEST: Scalar = Scalar([
    0xffff_ffff_0000_0000,
    0x53bd_a402_fffe_5bfe,
    0x3339_d808_09a1_d805,
    0x73ed_a753_299d_7d48,
]);

#[test]
fn test_addition() {
    let mut tmp = LARGEST;
    tmp += &LARGEST;

    assert_eq!(
        tmp,
        Scalar([
            0xffff_fffe_ffff_ffff,
            0x53bd_a402_fffe_5bfe,
            0x3339_d808_09a1_d805,
            0x73ed_a753_299d_7d48,
        ])
    );

    let mut tmp = LARGEST;
    tmp += &Scalar([1, 0, 0, 0]);

    assert_eq!(tmp, Scalar::zero());
}

#[test]
fn test_inversion() {
    assert!(bool::from(Scalar::zero().invert().is_none()));
    assert_eq!(Scalar::one().invert().unwrap(), Scalar::one());

    let mut tmp = R2;
    for _ in 0..100 {
        let inv = tmp.invert().unwrap();
        assert_eq!(inv * tmp, Scalar::one());
        tmp += R2;
    }
}

#[test]
fn test_reduced_big_endian() {
    // n + 5 reduces to 5
    let mut be = [0u8; 33];
    for (i, limb) in MODULUS.iter().enumerate() {
        be[33 - 8 * (i + 1)..33 - 8 * i].copy_from_slice(&limb.to_be_bytes());
    }
    be[32] += 5;
    assert_eq!(Scalar::from_be_bytes_reduced(&be), Scalar::from(5u64));

    assert_eq!(Scalar::from_be_bytes_reduced(&[]), Scalar::zero());
    assert_eq!(Scalar::from_be_bytes_reduced(&[1, 0]), Scalar::from(256u64));

    let x = Scalar::from_raw([7, 11, 13, 17]);
    assert_eq!(Scalar::from_be_bytes_reduced(&x.to_be_bytes()), x);
}

#[test]
fn test_limbs() {
    assert_eq!(Scalar::from(9u64).to_limbs(), [9, 0, 0, 0]);
    assert_eq!((-Scalar::one()).to_limbs()[3], MODULUS[3]);
}
