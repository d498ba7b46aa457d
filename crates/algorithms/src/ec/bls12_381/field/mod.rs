//! The BLS12-381 extension tower.
//!
//! ```text
//! Fp2  = Fp[u]  / (u^2 + 1)
//! Fp6  = Fp2[v] / (v^3 - ξ),  ξ = u + 1
//! Fp12 = Fp6[w] / (w^2 - v)
//! ```
//!
//! Each level is its own type; promotion from a lower level is an explicit
//! `From` conversion that fills the higher coefficients with zero.

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::error::Result;

pub mod fp; // Base field
pub mod fp12; // Degree-12 extension (target field)
pub mod fp2; // Quadratic extension
pub mod fp6; // Degree-6 extension
pub(crate) mod frobenius;

pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;

/// Arithmetic shared by every level of the tower.
///
/// Curve code is generic over this trait so the same group law serves G1
/// (over Fp), G2 (over Fp2) and untwisted points (over Fp12).
pub trait Field:
    Copy
    + Default
    + Debug
    + Eq
    + ConstantTimeEq
    + ConditionallySelectable
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Short name used in error contexts
    const NAME: &'static str;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Check if element is zero
    fn is_zero(&self) -> Choice;

    /// `self * self`
    fn square(&self) -> Self;

    /// `self + self`
    fn double(&self) -> Self;

    /// Multiplicative inverse, none for zero
    fn invert(&self) -> CtOption<Self>;

    /// Variable-time exponentiation by a little-endian limb exponent
    fn pow_vartime(&self, exp: &[u64]) -> Self;

    /// Embed a small integer
    fn from_u64(v: u64) -> Self;
}

/// Fields that curve points are serialized over: Fp for G1 and Fp2 for G2.
pub trait SqrtField: Field {
    /// Serialized size in bytes
    const BYTES: usize;

    /// A square root when one exists
    fn sqrt(&self) -> CtOption<Self>;

    /// Canonical sign bit for point compression
    fn sign(&self) -> Choice;

    /// Big-endian encoding, highest-degree coefficient first; `out` is `BYTES` long
    fn write_bytes(&self, out: &mut [u8]);

    /// Inverse of `write_bytes`; rejects wrong lengths and non-canonical values
    fn read_bytes(bytes: &[u8]) -> Result<Self>;
}

impl SqrtField for Fp {
    const BYTES: usize = fp::FP_BYTES;

    fn sqrt(&self) -> CtOption<Self> {
        Fp::sqrt(self)
    }

    fn sign(&self) -> Choice {
        self.lexicographically_largest()
    }

    fn write_bytes(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_bytes());
    }

    fn read_bytes(bytes: &[u8]) -> Result<Self> {
        Fp::from_slice(bytes)
    }
}

impl SqrtField for Fp2 {
    const BYTES: usize = 2 * fp::FP_BYTES;

    fn sqrt(&self) -> CtOption<Self> {
        Fp2::sqrt(self)
    }

    fn sign(&self) -> Choice {
        self.lexicographically_largest()
    }

    fn write_bytes(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_bytes());
    }

    fn read_bytes(bytes: &[u8]) -> Result<Self> {
        Fp2::from_slice(bytes)
    }
}
