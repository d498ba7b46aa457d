//! `hash_to_field` from RFC 9380, section 5.2, with L = 64.

use alloc::vec::Vec;

use sha2::Sha256;

use super::expand_message::expand_message_xmd;
use crate::ec::bls12_381::field::{Fp, Fp2};
use crate::error::{validate, Error, Result};

/// Bytes drawn per base field coefficient: ceil((381 + 128) / 8)
pub const L: usize = 64;

/// Signature shared by the message expanders
pub type ExpandFn = fn(&[u8], &[u8], usize) -> Result<Vec<u8>>;

/// Fields that `hash_to_field` can target
pub trait FromOkm: Sized {
    /// Extension degree over Fp
    const DEGREE: usize;

    /// Build from `DEGREE * L` uniform bytes, lowest coefficient first
    fn from_okm_bytes(bytes: &[u8]) -> Self;
}

fn okm_chunk(bytes: &[u8]) -> [u8; L] {
    let mut chunk = [0u8; L];
    chunk.copy_from_slice(&bytes[..L]);
    chunk
}

impl FromOkm for Fp {
    const DEGREE: usize = 1;

    fn from_okm_bytes(bytes: &[u8]) -> Fp {
        Fp::from_okm(&okm_chunk(bytes))
    }
}

impl FromOkm for Fp2 {
    const DEGREE: usize = 2;

    fn from_okm_bytes(bytes: &[u8]) -> Fp2 {
        Fp2::new(
            Fp::from_okm(&okm_chunk(bytes)),
            Fp::from_okm(&okm_chunk(&bytes[L..])),
        )
    }
}

/// Hash `msg` to `count` field elements using the given expander
pub fn hash_to_field<F: FromOkm>(
    msg: &[u8],
    dst: &[u8],
    count: usize,
    expand: ExpandFn,
) -> Result<Vec<F>> {
    validate::parameter(count > 0, "count", "must request at least one element")?;

    let elem_len = F::DEGREE * L;
    let len_in_bytes = count
        .checked_mul(elem_len)
        .ok_or_else(|| Error::param("count", "output length overflows usize"))?;
    let uniform_bytes = expand(msg, dst, len_in_bytes)?;
    validate::length("hash_to_field", uniform_bytes.len(), len_in_bytes)?;

    Ok(uniform_bytes
        .chunks_exact(elem_len)
        .map(F::from_okm_bytes)
        .collect())
}

/// Hash to `count` elements of Fp with SHA-256 expand_message_xmd
pub fn hp(msg: &[u8], count: usize, dst: &[u8]) -> Result<Vec<Fp>> {
    hash_to_field(msg, dst, count, expand_message_xmd::<Sha256>)
}

/// Hash to `count` elements of Fp2 with SHA-256 expand_message_xmd
pub fn hp2(msg: &[u8], count: usize, dst: &[u8]) -> Result<Vec<Fp2>> {
    hash_to_field(msg, dst, count, expand_message_xmd::<Sha256>)
}
