//! HMAC-based Key Derivation Function (HKDF) over SHA-256
//!
//! This module implements HKDF as defined in RFC 5869, fixed to SHA-256.
//! It is the extractor behind BLS key generation and the Lamport step of
//! EIP-2333 child derivation.

use alloc::vec;
use alloc::vec::Vec;

use ::hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};

/// Output size of the underlying hash in bytes
pub const HASH_LEN: usize = 32;

/// Largest output HKDF-Expand may produce
pub const MAX_OUTPUT_LEN: usize = 255 * HASH_LEN;

/// HKDF-Extract: `PRK = HMAC-SHA256(salt, ikm)`
pub fn extract(salt: &[u8], ikm: &[u8]) -> [u8; HASH_LEN] {
    let (prk, _) = Hkdf::<Sha256>::extract(Some(salt), ikm);
    prk.into()
}

/// HKDF-Expand: stretch `prk` into `length` bytes bound to `info`
///
/// `prk` must be at least [`HASH_LEN`] bytes, as produced by [`extract`].
pub fn expand(length: usize, prk: &[u8], info: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    validate::max_length("HKDF-Expand output", length, MAX_OUTPUT_LEN)?;

    let hk = Hkdf::<Sha256>::from_prk(prk).map_err(|_| Error::Length {
        context: "HKDF pseudorandom key",
        expected: HASH_LEN,
        actual: prk.len(),
    })?;

    let mut okm = Zeroizing::new(vec![0u8; length]);
    hk.expand(info, &mut okm[..]).map_err(|_| Error::Processing {
        operation: "HKDF-Expand",
        details: "output length rejected",
    })?;
    Ok(okm)
}

/// Extract then expand in one call
pub fn extract_expand(
    length: usize,
    key: &[u8],
    salt: &[u8],
    info: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    let prk = Zeroizing::new(extract(salt, key));
    expand(length, &prk[..], info)
}
