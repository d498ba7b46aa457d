//! Multi-precision limb arithmetic shared by the base field and the scalar field.
//!
//! Values are little-endian `[u64; N]` limbs. The modular routines assume
//! their inputs are already reduced below the modulus.

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// `a < b` as integers
#[inline]
pub(crate) fn lt<const N: usize>(a: &[u64; N], b: &[u64; N]) -> bool {
    let mut borrow = 0;
    for i in 0..N {
        (_, borrow) = sbb(a[i], b[i], borrow);
    }
    borrow != 0
}

/// Subtract `m` from `(hi, t)` when the value is at least `m`.
#[inline]
fn reduce_once<const N: usize>(t: [u64; N], hi: u64, m: &[u64; N]) -> [u64; N] {
    let mut r = [0u64; N];
    let mut borrow = 0;
    for i in 0..N {
        (r[i], borrow) = sbb(t[i], m[i], borrow);
    }
    let (_, borrow) = sbb(hi, 0, borrow);

    // borrow is all-ones exactly when t < m
    let mut out = [0u64; N];
    for i in 0..N {
        out[i] = (t[i] & borrow) | (r[i] & !borrow);
    }
    out
}

/// (a + b) mod m
#[inline]
pub(crate) fn add_mod<const N: usize>(a: &[u64; N], b: &[u64; N], m: &[u64; N]) -> [u64; N] {
    let mut s = [0u64; N];
    let mut carry = 0;
    for i in 0..N {
        (s[i], carry) = adc(a[i], b[i], carry);
    }
    reduce_once(s, carry, m)
}

/// (a - b) mod m
#[inline]
pub(crate) fn sub_mod<const N: usize>(a: &[u64; N], b: &[u64; N], m: &[u64; N]) -> [u64; N] {
    let mut d = [0u64; N];
    let mut borrow = 0;
    for i in 0..N {
        (d[i], borrow) = sbb(a[i], b[i], borrow);
    }

    // Add the modulus back if we wrapped
    let mut carry = 0;
    for i in 0..N {
        (d[i], carry) = adc(d[i], m[i] & borrow, carry);
    }
    d
}

/// (-a) mod m
#[inline]
pub(crate) fn neg_mod<const N: usize>(a: &[u64; N], m: &[u64; N]) -> [u64; N] {
    let mut d = [0u64; N];
    let mut borrow = 0;
    let mut nonzero = 0;
    for i in 0..N {
        (d[i], borrow) = sbb(m[i], a[i], borrow);
        nonzero |= a[i];
    }

    let mask = ((nonzero == 0) as u64).wrapping_sub(1);
    for limb in d.iter_mut() {
        *limb &= mask;
    }
    d
}

/// Montgomery product `a * b * 2^(-64N) mod m` (CIOS).
///
/// `inv` is `-m^(-1) mod 2^64`.
#[inline]
pub(crate) fn mont_mul<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    m: &[u64; N],
    inv: u64,
) -> [u64; N] {
    let mut t = [0u64; N];
    let mut hi = 0u64;

    for i in 0..N {
        let mut carry = 0;
        for j in 0..N {
            (t[j], carry) = mac(t[j], a[j], b[i], carry);
        }
        let (hi0, hi1) = adc(hi, carry, 0);

        let k = t[0].wrapping_mul(inv);
        let (_, mut carry) = mac(t[0], k, m[0], 0);
        for j in 1..N {
            (t[j - 1], carry) = mac(t[j], k, m[j], carry);
        }
        let (top, c) = adc(hi0, carry, 0);
        t[N - 1] = top;
        hi = hi1 + c;
    }

    reduce_once(t, hi, m)
}

/// Convert out of Montgomery form.
#[inline]
pub(crate) fn mont_reduce<const N: usize>(a: &[u64; N], m: &[u64; N], inv: u64) -> [u64; N] {
    let mut one = [0u64; N];
    one[0] = 1;
    mont_mul(a, &one, m, inv)
}

/// Iterate the bits of a little-endian limb slice from the most significant
/// set bit down to bit 0.
pub(crate) fn bits_msb_first(limbs: &[u64]) -> impl Iterator<Item = bool> + '_ {
    let top = limbs
        .iter()
        .rposition(|&l| l != 0)
        .map(|i| i * 64 + (64 - limbs[i].leading_zeros() as usize))
        .unwrap_or(0);
    (0..top).rev().map(move |i| (limbs[i / 64] >> (i % 64)) & 1 == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small odd modulus so results can be checked by hand
    const M: [u64; 2] = [0xffff_ffff_ffff_ffc5, 0x0000_0000_0000_0001];

    #[test]
    fn test_add_sub_wrap() {
        let a = [0xffff_ffff_ffff_ffc0, 1];
        let b = [10, 0];
        let s = add_mod(&a, &b, &M);
        assert_eq!(s, [5, 0]);
        assert_eq!(sub_mod(&s, &b, &M), a);
        assert_eq!(neg_mod(&[0, 0], &M), [0, 0]);
        assert_eq!(add_mod(&neg_mod(&a, &M), &a, &M), [0, 0]);
    }

    #[test]
    fn test_lt() {
        assert!(lt(&[1, 0], &[0, 1]));
        assert!(!lt(&[0, 1], &[0, 1]));
        assert!(!lt(&[0, 2], &[5, 1]));
    }

    #[test]
    fn test_bits_msb_first() {
        let bits: alloc::vec::Vec<bool> = bits_msb_first(&[0b1011, 0]).collect();
        assert_eq!(bits, [true, false, true, true]);
        assert_eq!(bits_msb_first(&[0, 1]).count(), 65);
        assert_eq!(bits_msb_first(&[0]).count(), 0);
    }
}
