//! Quadratic extension Fp2 = Fp[u] / (u^2 + 1)

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::{Fp, FP_BYTES};
use super::frobenius::FROBENIUS_COEFF_FP2_C1;
use super::Field;
use crate::error::{validate, Error, Result};

/// Element c0 + c1·u of Fp2
#[derive(Copy, Clone, Default)]
pub struct Fp2 {
    /// Constant coefficient
    pub c0: Fp,
    /// Coefficient of u
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl zeroize::DefaultIsZeroes for Fp2 {}

impl Fp2 {
    /// Build from coefficients
    #[inline]
    pub const fn new(c0: Fp, c1: Fp) -> Fp2 {
        Fp2 { c0, c1 }
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }

    /// c0 - c1·u
    #[inline]
    pub fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Raise to q^power
    #[inline]
    pub fn frobenius_map(&self, power: usize) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: self.c1 * FROBENIUS_COEFF_FP2_C1[power % 2],
        }
    }

    /// Multiply by the Fp6 non-residue ξ = u + 1
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (a + bu)(u + 1) = (a - b) + (a + b)u
        Fp2 {
            c0: self.c0 - self.c1,
            c1: self.c0 + self.c1,
        }
    }

    /// Multiply both coefficients by a base field element
    #[inline]
    pub fn mul_by_fp(&self, f: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0 * f,
            c1: self.c1 * f,
        }
    }

    /// Square this element
    pub fn square(&self) -> Fp2 {
        // (a + bu)^2 = (a + b)(a - b) + 2abu
        let a = self.c0 + self.c1;
        let b = self.c0 - self.c1;
        let c = self.c0.double();

        Fp2 {
            c0: a * b,
            c1: c * self.c1,
        }
    }

    /// Multiply two elements (Karatsuba)
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let o = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp2 {
            c0: aa - bb,
            c1: o - aa - bb,
        }
    }

    /// Add two elements
    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    /// Subtract two elements
    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    /// Negate this element
    pub fn neg(&self) -> Fp2 {
        Fp2 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Double this element
    pub fn double(&self) -> Fp2 {
        Fp2 {
            c0: self.c0.double(),
            c1: self.c1.double(),
        }
    }

    /// Multiplicative inverse: (a + bu)^-1 = (a - bu) / (a^2 + b^2)
    pub fn invert(&self) -> CtOption<Fp2> {
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: self.c1 * -t,
        })
    }

    /// Variable-time exponentiation by a little-endian limb exponent
    pub fn pow_vartime(&self, by: &[u64]) -> Fp2 {
        let mut res = Fp2::one();
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

    /// Square root if one exists.
    ///
    /// Uses the norm method: with alpha = sqrt(c0^2 + c1^2), one of
    /// (c0 ± alpha)/2 is a square delta, and sqrt(delta) + c1/(2 sqrt(delta))·u
    /// squares back to the input.
    pub fn sqrt(&self) -> CtOption<Fp2> {
        if bool::from(self.is_zero()) {
            return CtOption::new(Fp2::zero(), Choice::from(1u8));
        }

        let candidate = if bool::from(self.c1.is_zero()) {
            // -1 is a non-residue, so exactly one of c0 and -c0 is a square
            match Option::<Fp>::from(self.c0.sqrt()) {
                Some(r) => Some(Fp2::new(r, Fp::zero())),
                None => Option::<Fp>::from((-self.c0).sqrt()).map(|r| Fp2::new(Fp::zero(), r)),
            }
        } else {
            let two_inv = Fp::from_u64(2).invert().unwrap_or(Fp::zero());
            let norm = self.c0.square() + self.c1.square();
            Option::<Fp>::from(norm.sqrt()).and_then(|alpha| {
                let mut delta = (self.c0 + alpha) * two_inv;
                if !bool::from(delta.is_square()) {
                    delta = (self.c0 - alpha) * two_inv;
                }
                let x0 = Option::<Fp>::from(delta.sqrt())?;
                let x1 = Option::<Fp>::from(x0.double().invert())? * self.c1;
                Some(Fp2::new(x0, x1))
            })
        };

        match candidate {
            Some(r) => CtOption::new(r, r.square().ct_eq(self)),
            None => CtOption::new(Fp2::zero(), Choice::from(0u8)),
        }
    }

    /// Square root, or `NoSquareRoot`
    pub fn try_sqrt(&self) -> Result<Fp2> {
        Option::from(self.sqrt()).ok_or(Error::NoSquareRoot { context: "Fp2" })
    }

    /// Compression sign: the sign of c1, or of c0 when c1 is zero
    pub fn lexicographically_largest(&self) -> Choice {
        self.c1.lexicographically_largest()
            | (self.c1.is_zero() & self.c0.lexicographically_largest())
    }

    /// `sgn0` from the hash-to-curve construction: parity of c0, or of c1 when c0 is zero
    pub fn sgn0(&self) -> Choice {
        self.c0.is_odd() | (self.c0.is_zero() & self.c1.is_odd())
    }

    /// Encode as c1 ‖ c0, 96 bytes big-endian
    pub fn to_bytes(&self) -> [u8; 96] {
        let mut res = [0u8; 96];
        res[..FP_BYTES].copy_from_slice(&self.c1.to_bytes());
        res[FP_BYTES..].copy_from_slice(&self.c0.to_bytes());
        res
    }

    /// Decode c1 ‖ c0, rejecting non-canonical coefficients
    pub fn from_bytes(bytes: &[u8; 96]) -> CtOption<Fp2> {
        let mut hi = [0u8; FP_BYTES];
        let mut lo = [0u8; FP_BYTES];
        hi.copy_from_slice(&bytes[..FP_BYTES]);
        lo.copy_from_slice(&bytes[FP_BYTES..]);

        let c1 = Fp::from_bytes(&hi);
        let c0 = Fp::from_bytes(&lo);
        c0.and_then(|c0| c1.map(|c1| Fp2 { c0, c1 }))
    }

    /// Decode from a slice of exactly 96 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Fp2> {
        validate::length("Fp2", bytes.len(), 2 * FP_BYTES)?;
        let mut buf = [0u8; 2 * FP_BYTES];
        buf.copy_from_slice(bytes);
        Option::from(Fp2::from_bytes(&buf)).ok_or(Error::Encoding {
            context: "Fp2",
            details: "coefficient is not below the field modulus",
        })
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn neg(self) -> Fp2 {
        Fp2::neg(self)
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::sub(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::add(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        Fp2::mul(self, rhs)
    }
}

impl_neg_owned!(Fp2);
impl_binops_additive!(Fp2, Fp2);
impl_binops_multiplicative!(Fp2, Fp2);

impl Field for Fp2 {
    const NAME: &'static str = "Fp2";

    fn zero() -> Self {
        Fp2::zero()
    }

    fn one() -> Self {
        Fp2::one()
    }

    fn is_zero(&self) -> Choice {
        Fp2::is_zero(self)
    }

    fn square(&self) -> Self {
        Fp2::square(self)
    }

    fn double(&self) -> Self {
        Fp2::double(self)
    }

    fn invert(&self) -> CtOption<Self> {
        Fp2::invert(self)
    }

    fn pow_vartime(&self, exp: &[u64]) -> Self {
        Fp2::pow_vartime(self, exp)
    }

    fn from_u64(v: u64) -> Self {
        Fp2::from(Fp::from_u64(v))
    }
}
