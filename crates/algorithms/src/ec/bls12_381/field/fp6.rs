//! Cubic extension Fp6 = Fp2[v] / (v^3 - ξ), ξ = u + 1

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::{Fp, FP_BYTES};
use super::fp2::Fp2;
use super::frobenius::{FROBENIUS_COEFF_FP6_C1, FROBENIUS_COEFF_FP6_C2};
use super::Field;
use crate::error::{validate, Result};

/// Serialized size of an Fp6 element
pub const FP6_BYTES: usize = 6 * FP_BYTES;

/// Element c0 + c1·v + c2·v^2 of Fp6
#[derive(Copy, Clone, Default)]
pub struct Fp6 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of v
    pub c1: Fp2,
    /// Coefficient of v^2
    pub c2: Fp2,
}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}

impl From<Fp> for Fp6 {
    fn from(f: Fp) -> Fp6 {
        Fp6::from(Fp2::from(f))
    }
}

impl From<Fp2> for Fp6 {
    fn from(f: Fp2) -> Fp6 {
        Fp6 {
            c0: f,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }
}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Eq for Fp6 {}
impl PartialEq for Fp6 {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl Fp6 {
    /// Build from coefficients
    #[inline]
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Fp6 {
        Fp6 { c0, c1, c2 }
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp6 {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp6 {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp6 {
        Fp6 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
            c2: Fp2::random(&mut rng),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Multiply by v, the Fp12 non-residue
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fp6 {
        // v^3 = ξ shifts c2 back round to the constant term
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Multiply every coefficient by an Fp2 element
    #[inline]
    pub fn mul_by_fp2(&self, f: &Fp2) -> Fp6 {
        Fp6 {
            c0: self.c0 * f,
            c1: self.c1 * f,
            c2: self.c2 * f,
        }
    }

    /// Raise to q^power
    pub fn frobenius_map(&self, power: usize) -> Fp6 {
        Fp6 {
            c0: self.c0.frobenius_map(power),
            c1: self.c1.frobenius_map(power) * FROBENIUS_COEFF_FP6_C1[power % 6],
            c2: self.c2.frobenius_map(power) * FROBENIUS_COEFF_FP6_C2[power % 6],
        }
    }

    /// Multiply two elements (Karatsuba over the three coefficients)
    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = self.c2 * rhs.c2;

        let c0 = ((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - t1 - t2).mul_by_nonresidue() + t0;
        let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1 + t2.mul_by_nonresidue();
        let c2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - t0 - t2 + t1;

        Fp6 { c0, c1, c2 }
    }

    /// Square this element
    pub fn square(&self) -> Fp6 {
        self.mul(self)
    }

    /// Add two elements
    pub fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }

    /// Subtract two elements
    pub fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }

    /// Negate this element
    pub fn neg(&self) -> Fp6 {
        Fp6 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Fp6> {
        let (a, b, c) = (self.c0, self.c1, self.c2);

        let g0 = a.square() - (b * c).mul_by_nonresidue();
        let g1 = c.square().mul_by_nonresidue() - a * b;
        let g2 = b.square() - a * c;

        let norm = g0 * a + (g1 * c + g2 * b).mul_by_nonresidue();
        norm.invert().map(|t| Fp6 {
            c0: g0 * t,
            c1: g1 * t,
            c2: g2 * t,
        })
    }

    /// Variable-time exponentiation by a little-endian limb exponent
    pub fn pow_vartime(&self, by: &[u64]) -> Fp6 {
        let mut res = Fp6::one();
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

    /// Encode as c2 ‖ c1 ‖ c0
    pub fn to_bytes(&self) -> [u8; FP6_BYTES] {
        let mut res = [0u8; FP6_BYTES];
        res[..96].copy_from_slice(&self.c2.to_bytes());
        res[96..192].copy_from_slice(&self.c1.to_bytes());
        res[192..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode c2 ‖ c1 ‖ c0 from a slice of exactly 288 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Fp6> {
        validate::length("Fp6", bytes.len(), FP6_BYTES)?;
        Ok(Fp6 {
            c2: Fp2::from_slice(&bytes[..96])?,
            c1: Fp2::from_slice(&bytes[96..192])?,
            c0: Fp2::from_slice(&bytes[192..])?,
        })
    }
}

impl<'a> Neg for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn neg(self) -> Fp6 {
        Fp6::neg(self)
    }
}

impl<'a, 'b> Sub<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn sub(self, rhs: &'b Fp6) -> Fp6 {
        Fp6::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn add(self, rhs: &'b Fp6) -> Fp6 {
        Fp6::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;

    #[inline]
    fn mul(self, rhs: &'b Fp6) -> Fp6 {
        Fp6::mul(self, rhs)
    }
}

impl_neg_owned!(Fp6);
impl_binops_additive!(Fp6, Fp6);
impl_binops_multiplicative!(Fp6, Fp6);

impl Field for Fp6 {
    const NAME: &'static str = "Fp6";

    fn zero() -> Self {
        Fp6::zero()
    }

    fn one() -> Self {
        Fp6::one()
    }

    fn is_zero(&self) -> Choice {
        Fp6::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp6::square(self)
    }

    fn double(&self) -> Self {
        Fp6::add(self, self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp6::invert(self)
    }

    fn pow_vartime(&self, exp: &[u64]) -> Self {
        Fp6::pow_vartime(self, exp)
    }

    fn from_u64(v: u64) -> Self {
        Fp6::from(Fp::from_u64(v))
    }
}
