//! Short Weierstrass curves y^2 = x^3 + a·x + b over a level of the tower.
//!
//! One generic implementation of the group law serves the base curve (Fp),
//! the twist (Fp2), the 3-isogenous curve used by the SWU map (Fp2) and
//! untwisted points (Fp12). A curve is a zero-sized marker type carrying its
//! coefficients as associated constants.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use subtle::{Choice, ConstantTimeEq};

use super::arithmetic::bits_msb_first;
use super::field::{Field, SqrtField};
use super::scalar::{Scalar, MODULUS as GROUP_ORDER};
use crate::error::{validate, Error, Result};

/// Coefficients of a curve y^2 = x^3 + a·x + b
pub trait CurveParams: Copy + Clone + fmt::Debug + Default + PartialEq + Eq + 'static {
    /// Field the coordinates live in
    type Base: Field;

    /// Short name used in error contexts
    const NAME: &'static str;

    /// Coefficient a
    const A: Self::Base;

    /// Coefficient b
    const B: Self::Base;
}

/// Curves with a distinguished generator of the order-n subgroup
pub trait GroupParams: CurveParams {
    /// Generator x coordinate
    const GENERATOR_X: Self::Base;

    /// Generator y coordinate
    const GENERATOR_Y: Self::Base;
}

/// Flag bits on the leading byte of a compressed encoding
const FLAG_COMPRESSED: u8 = 0x80;
const FLAG_INFINITY: u8 = 0x40;
const FLAG_SIGN: u8 = 0x20;
const FLAG_MASK: u8 = 0xe0;

// ============================================================================
// Affine Points
// ============================================================================

/// A point (x, y) or the point at infinity
#[derive(Copy, Clone, Debug)]
pub struct AffinePoint<C: CurveParams> {
    /// x coordinate, zero at infinity
    pub x: C::Base,
    /// y coordinate, zero at infinity
    pub y: C::Base,
    /// Point at infinity flag
    pub infinity: bool,
    _curve: PhantomData<C>,
}

impl<C: CurveParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: CurveParams> PartialEq for AffinePoint<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl<C: CurveParams> Eq for AffinePoint<C> {}

impl<C: CurveParams> AffinePoint<C> {
    /// Point at infinity
    pub fn identity() -> Self {
        AffinePoint {
            x: C::Base::zero(),
            y: C::Base::zero(),
            infinity: true,
            _curve: PhantomData,
        }
    }

    /// Finite point from coordinates; the curve equation is not checked
    pub fn from_xy(x: C::Base, y: C::Base) -> Self {
        AffinePoint {
            x,
            y,
            infinity: false,
            _curve: PhantomData,
        }
    }

    /// Check if this is the point at infinity
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Check y^2 = x^3 + a·x + b
    pub fn is_on_curve(&self) -> bool {
        self.infinity || self.y.square() == rhs::<C>(&self.x)
    }

    /// Negate a point
    pub fn negate(&self) -> Self {
        AffinePoint {
            x: self.x,
            y: -self.y,
            infinity: self.infinity,
            _curve: PhantomData,
        }
    }

    /// Tangent-line doubling
    pub fn double(&self) -> Self {
        if self.infinity || bool::from(self.y.is_zero()) {
            return Self::identity();
        }

        let x2 = self.x.square();
        let lambda = (x2.double() + x2 + C::A) * inv(&self.y.double());
        let x3 = lambda.square() - self.x.double();
        let y3 = lambda * (self.x - x3) - self.y;
        Self::from_xy(x3, y3)
    }

    /// Chord-line addition
    pub fn add(&self, other: &Self) -> Self {
        if self.infinity {
            return *other;
        }
        if other.infinity {
            return *self;
        }
        if self == other {
            return self.double();
        }
        if self.x == other.x {
            // P + (-P)
            return Self::identity();
        }

        let lambda = (other.y - self.y) * inv(&(other.x - self.x));
        let x3 = lambda.square() - self.x - other.x;
        let y3 = lambda * (self.x - x3) - self.y;
        Self::from_xy(x3, y3)
    }

    /// Lift to Jacobian coordinates with z = 1
    pub fn to_jacobian(&self) -> JacobianPoint<C> {
        JacobianPoint::from(*self)
    }

    /// Scalar multiplication by a little-endian limb exponent
    pub fn multiply_limbs(&self, by: &[u64]) -> Self {
        self.to_jacobian().multiply_limbs(by).to_affine()
    }
}

impl<C: GroupParams> AffinePoint<C> {
    /// The fixed subgroup generator
    pub fn generator() -> Self {
        Self::from_xy(C::GENERATOR_X, C::GENERATOR_Y)
    }
}

// ============================================================================
// Jacobian Points
// ============================================================================

/// A point (X : Y : Z) standing for (X/Z^2, Y/Z^3); Z = 0 is infinity
#[derive(Copy, Clone, Debug)]
pub struct JacobianPoint<C: CurveParams> {
    /// X coordinate
    pub x: C::Base,
    /// Y coordinate
    pub y: C::Base,
    /// Z coordinate
    pub z: C::Base,
    _curve: PhantomData<C>,
}

impl<C: CurveParams> Default for JacobianPoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: CurveParams> From<AffinePoint<C>> for JacobianPoint<C> {
    fn from(p: AffinePoint<C>) -> Self {
        if p.infinity {
            Self::identity()
        } else {
            JacobianPoint::new(p.x, p.y, C::Base::one())
        }
    }
}

impl<C: CurveParams> From<JacobianPoint<C>> for AffinePoint<C> {
    fn from(p: JacobianPoint<C>) -> Self {
        p.to_affine()
    }
}

impl<C: CurveParams> ConstantTimeEq for JacobianPoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X1/Z1^2, Y1/Z1^3) == (X2/Z2^2, Y2/Z2^3) without inverting
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * z2z2 * other.z;
        let s2 = other.y * z1z1 * self.z;

        let inf1 = self.z.is_zero();
        let inf2 = other.z.is_zero();

        (inf1 & inf2) | (!inf1 & !inf2 & u1.ct_eq(&u2) & s1.ct_eq(&s2))
    }
}

impl<C: CurveParams> PartialEq for JacobianPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<C: CurveParams> Eq for JacobianPoint<C> {}

impl<C: CurveParams> JacobianPoint<C> {
    /// Build from raw coordinates; the curve equation is not checked
    pub fn new(x: C::Base, y: C::Base, z: C::Base) -> Self {
        JacobianPoint {
            x,
            y,
            z,
            _curve: PhantomData,
        }
    }

    /// Point at infinity, encoded (1 : 1 : 0)
    pub fn identity() -> Self {
        Self::new(C::Base::one(), C::Base::one(), C::Base::zero())
    }

    /// Check if this is the point at infinity
    pub fn is_identity(&self) -> bool {
        bool::from(self.z.is_zero())
    }

    /// Normalize to affine coordinates
    pub fn to_affine(&self) -> AffinePoint<C> {
        if self.is_identity() {
            return AffinePoint::identity();
        }

        let zinv = inv(&self.z);
        let zinv2 = zinv.square();
        AffinePoint::from_xy(self.x * zinv2, self.y * zinv2 * zinv)
    }

    /// Check the curve equation
    pub fn is_on_curve(&self) -> bool {
        self.is_identity() || self.to_affine().is_on_curve()
    }

    /// On the curve and of order dividing n
    pub fn is_valid(&self) -> bool {
        self.is_on_curve() && self.multiply_limbs(&GROUP_ORDER).is_identity()
    }

    /// Negate a point
    pub fn negate(&self) -> Self {
        Self::new(self.x, -self.y, self.z)
    }

    /// Point doubling
    pub fn double(&self) -> Self {
        if self.is_identity() || bool::from(self.y.is_zero()) {
            return Self::identity();
        }

        let y2 = self.y.square();
        let y4 = y2.square();
        let z2 = self.z.square();

        // S = 4·X·Y^2, M = 3·X^2 + a·Z^4
        let s = (self.x * y2).double().double();
        let x2 = self.x.square();
        let m = x2.double() + x2 + C::A * z2.square();

        let x3 = m.square() - s.double();
        let y3 = m * (s - x3) - y4.double().double().double();
        let z3 = (self.y * self.z).double();
        Self::new(x3, y3, z3)
    }

    /// Point addition
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x * z2z2;
        let u2 = other.x * z1z1;
        let s1 = self.y * z2z2 * other.z;
        let s2 = other.y * z1z1 * self.z;

        if u1 == u2 {
            return if s1 == s2 {
                self.double()
            } else {
                Self::identity()
            };
        }

        let h = u2 - u1;
        let r = s2 - s1;
        let h2 = h.square();
        let h3 = h2 * h;
        let u1h2 = u1 * h2;

        let x3 = r.square() - h3 - u1h2.double();
        let y3 = r * (u1h2 - x3) - s1 * h3;
        let z3 = h * self.z * other.z;
        Self::new(x3, y3, z3)
    }

    /// Scalar multiplication by a little-endian limb exponent, MSB-first
    /// double-and-add
    pub fn multiply_limbs(&self, by: &[u64]) -> Self {
        bits_msb_first(by).fold(Self::identity(), |acc, bit| {
            let acc = acc.double();
            if bit {
                JacobianPoint::add(&acc, self)
            } else {
                acc
            }
        })
    }

    /// Scalar multiplication
    pub fn multiply(&self, by: &Scalar) -> Self {
        self.multiply_limbs(&by.to_limbs())
    }
}

impl<C: GroupParams> JacobianPoint<C> {
    /// The fixed subgroup generator
    pub fn generator() -> Self {
        AffinePoint::<C>::generator().to_jacobian()
    }
}

// ============================================================================
// Compressed Encoding
// ============================================================================

impl<C: CurveParams> JacobianPoint<C>
where
    C::Base: SqrtField,
{
    /// Solve y^2 = x^3 + a·x + b for a nonzero y
    pub fn y_for_x(x: &C::Base) -> Result<C::Base> {
        let y = Option::<C::Base>::from(rhs::<C>(x).sqrt())
            .ok_or(Error::NoSquareRoot { context: C::NAME })?;
        if bool::from(y.is_zero()) {
            return Err(Error::NoSquareRoot { context: C::NAME });
        }
        Ok(y)
    }

    /// Write the compressed form into `out`, which must be `Base::BYTES` long.
    ///
    /// Infinity is `0xc0` followed by zeros; otherwise the x coordinate with
    /// the compression bit and the sign of y on the leading byte.
    pub fn write_compressed(&self, out: &mut [u8]) {
        let p = self.to_affine();
        if p.infinity {
            out.iter_mut().for_each(|b| *b = 0);
            out[0] = FLAG_COMPRESSED | FLAG_INFINITY;
            return;
        }

        p.x.write_bytes(out);
        out[0] |= FLAG_COMPRESSED;
        if bool::from(p.y.sign()) {
            out[0] |= FLAG_SIGN;
        }
    }

    /// Parse a compressed encoding. The point is on the curve but subgroup
    /// membership is left to `is_valid`.
    pub fn read_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(C::NAME, bytes.len(), C::Base::BYTES)?;

        let flags = bytes[0] & FLAG_MASK;
        if matches!(flags, 0x20 | 0x60 | 0xe0) {
            return Err(Error::Encoding {
                context: C::NAME,
                details: "invalid leading flag bits",
            });
        }
        if flags & FLAG_COMPRESSED == 0 {
            return Err(Error::Encoding {
                context: C::NAME,
                details: "compression bit must be set",
            });
        }

        if flags & FLAG_INFINITY != 0 {
            let clean = bytes[0] & !FLAG_MASK == 0 && bytes[1..].iter().all(|b| *b == 0);
            if !clean {
                return Err(Error::Encoding {
                    context: C::NAME,
                    details: "point at infinity with nonzero bytes",
                });
            }
            return Ok(Self::identity());
        }

        let mut storage = [0u8; 96];
        let buf = &mut storage[..bytes.len()];
        buf.copy_from_slice(bytes);
        buf[0] &= !FLAG_MASK;

        let x = C::Base::read_bytes(buf)?;
        let y = Self::y_for_x(&x)?;
        let want_sign = flags & FLAG_SIGN != 0;
        let y = if bool::from(y.sign()) == want_sign { y } else { -y };

        Ok(AffinePoint::from_xy(x, y).to_jacobian())
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<'a, 'b, C: CurveParams> Add<&'b JacobianPoint<C>> for &'a JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline]
    fn add(self, rhs: &'b JacobianPoint<C>) -> JacobianPoint<C> {
        JacobianPoint::add(self, rhs)
    }
}

impl<C: CurveParams> Add for JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline]
    fn add(self, rhs: JacobianPoint<C>) -> JacobianPoint<C> {
        JacobianPoint::add(&self, &rhs)
    }
}

impl<'a, 'b, C: CurveParams> Sub<&'b JacobianPoint<C>> for &'a JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline]
    fn sub(self, rhs: &'b JacobianPoint<C>) -> JacobianPoint<C> {
        JacobianPoint::add(self, &rhs.negate())
    }
}

impl<C: CurveParams> Sub for JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline]
    fn sub(self, rhs: JacobianPoint<C>) -> JacobianPoint<C> {
        &self - &rhs
    }
}

impl<C: CurveParams> AddAssign for JacobianPoint<C> {
    #[inline]
    fn add_assign(&mut self, rhs: JacobianPoint<C>) {
        *self = JacobianPoint::add(self, &rhs);
    }
}

impl<C: CurveParams> SubAssign for JacobianPoint<C> {
    #[inline]
    fn sub_assign(&mut self, rhs: JacobianPoint<C>) {
        *self = JacobianPoint::add(self, &rhs.negate());
    }
}

impl<C: CurveParams> Neg for JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline]
    fn neg(self) -> JacobianPoint<C> {
        self.negate()
    }
}

impl<'a, C: CurveParams> Neg for &'a JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline]
    fn neg(self) -> JacobianPoint<C> {
        self.negate()
    }
}

impl<'a, 'b, C: CurveParams> Mul<&'b Scalar> for &'a JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline]
    fn mul(self, rhs: &'b Scalar) -> JacobianPoint<C> {
        self.multiply(rhs)
    }
}

impl<C: CurveParams> Mul<Scalar> for JacobianPoint<C> {
    type Output = JacobianPoint<C>;

    #[inline]
    fn mul(self, rhs: Scalar) -> JacobianPoint<C> {
        self.multiply(&rhs)
    }
}

impl<C: CurveParams> core::iter::Sum for JacobianPoint<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::identity(), |acc, p| acc + p)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// x^3 + a·x + b
#[inline]
fn rhs<C: CurveParams>(x: &C::Base) -> C::Base {
    x.square() * *x + C::A * *x + C::B
}

/// Inverse with zero mapped to zero
#[inline]
pub(crate) fn inv<F: Field>(f: &F) -> F {
    f.invert().unwrap_or(F::zero())
}
