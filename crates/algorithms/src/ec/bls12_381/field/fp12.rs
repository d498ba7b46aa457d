//! Target field Fp12 = Fp6[w] / (w^2 - v)

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;
use super::fp6::{Fp6, FP6_BYTES};
use super::frobenius::FROBENIUS_COEFF_FP12_C1;
use super::Field;
use crate::error::{validate, Result};

/// Serialized size of an Fp12 element
pub const FP12_BYTES: usize = 2 * FP6_BYTES;

/// Element c0 + c1·w of Fp12
#[derive(Copy, Clone, Default)]
pub struct Fp12 {
    /// Constant coefficient
    pub c0: Fp6,
    /// Coefficient of w
    pub c1: Fp6,
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*w", self.c0, self.c1)
    }
}

impl From<Fp> for Fp12 {
    fn from(f: Fp) -> Fp12 {
        Fp12::from(Fp6::from(f))
    }
}

impl From<Fp2> for Fp12 {
    fn from(f: Fp2) -> Fp12 {
        Fp12::from(Fp6::from(f))
    }
}

impl From<Fp6> for Fp12 {
    fn from(f: Fp6) -> Fp12 {
        Fp12 {
            c0: f,
            c1: Fp6::zero(),
        }
    }
}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Fp12 {
    /// Build from coefficients
    #[inline]
    pub const fn new(c0: Fp6, c1: Fp6) -> Fp12 {
        Fp12 { c0, c1 }
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp12 {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp12 {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp12 {
        Fp12 {
            c0: Fp6::random(&mut rng),
            c1: Fp6::random(&mut rng),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp12::one())
    }

    /// c0 - c1·w, which is the inverse for unitary elements
    #[inline]
    pub fn conjugate(&self) -> Fp12 {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Raise to q^power
    pub fn frobenius_map(&self, power: usize) -> Fp12 {
        Fp12 {
            c0: self.c0.frobenius_map(power),
            c1: self
                .c1
                .frobenius_map(power)
                .mul_by_fp2(&FROBENIUS_COEFF_FP12_C1[power % 12]),
        }
    }

    /// Multiply two elements (Karatsuba)
    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let o = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp12 {
            c0: aa + bb.mul_by_nonresidue(),
            c1: o - aa - bb,
        }
    }

    /// Square this element
    pub fn square(&self) -> Fp12 {
        // (a + bw)^2 = (a + b)(a + vb) - ab - v·ab + 2ab·w
        let ab = self.c0 * self.c1;
        let c0 = (self.c0 + self.c1) * (self.c0 + self.c1.mul_by_nonresidue())
            - ab
            - ab.mul_by_nonresidue();

        Fp12 {
            c0,
            c1: ab + ab,
        }
    }

    /// Add two elements
    pub fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Subtract two elements
    pub fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Negate this element
    pub fn neg(&self) -> Fp12 {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Multiplicative inverse: (a + bw)^-1 = (a - bw) / (a^2 - v·b^2)
    pub fn invert(&self) -> CtOption<Fp12> {
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Fp12 {
                c0: self.c0 * t,
                c1: -(self.c1 * t),
            })
    }

    /// Variable-time exponentiation by a little-endian limb exponent
    pub fn pow_vartime(&self, by: &[u64]) -> Fp12 {
        let mut res = Fp12::one();
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

    /// Encode as c1 ‖ c0
    pub fn to_bytes(&self) -> [u8; FP12_BYTES] {
        let mut res = [0u8; FP12_BYTES];
        res[..FP6_BYTES].copy_from_slice(&self.c1.to_bytes());
        res[FP6_BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode c1 ‖ c0 from a slice of exactly 576 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Fp12> {
        validate::length("Fp12", bytes.len(), FP12_BYTES)?;
        Ok(Fp12 {
            c1: Fp6::from_slice(&bytes[..FP6_BYTES])?,
            c0: Fp6::from_slice(&bytes[FP6_BYTES..])?,
        })
    }
}

impl<'a> Neg for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn neg(self) -> Fp12 {
        Fp12::neg(self)
    }
}

impl<'a, 'b> Sub<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn sub(self, rhs: &'b Fp12) -> Fp12 {
        Fp12::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn add(self, rhs: &'b Fp12) -> Fp12 {
        Fp12::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn mul(self, rhs: &'b Fp12) -> Fp12 {
        Fp12::mul(self, rhs)
    }
}

impl_neg_owned!(Fp12);
impl_binops_additive!(Fp12, Fp12);
impl_binops_multiplicative!(Fp12, Fp12);

impl Field for Fp12 {
    const NAME: &'static str = "Fp12";

    fn zero() -> Self {
        Fp12::zero()
    }

    fn one() -> Self {
        Fp12::one()
    }

    fn is_zero(&self) -> Choice {
        Fp12::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp12::square(self)
    }

    fn double(&self) -> Self {
        Fp12::add(self, self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp12::invert(self)
    }

    fn pow_vartime(&self, exp: &[u64]) -> Self {
        Fp12::pow_vartime(self, exp)
    }

    fn from_u64(v: u64) -> Self {
        Fp12::from(Fp::from_u64(v))
    }
}
