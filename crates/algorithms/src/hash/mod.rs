//! Fixed-output SHA-256 helpers used by key derivation
//!
//! `hash256` is plain SHA-256. `hash512` widens it to 64 bytes by hashing
//! the message twice with a one-byte counter appended.

use sha2::{Digest, Sha256};

pub use sha2::{Sha256 as Sha256Hash, Sha512 as Sha512Hash};

/// XOF for `expand_message_xof`
pub use sha3::Shake256 as Shake256Xof;

/// Output size of [`hash256`] in bytes
pub const HASH256_SIZE: usize = 32;

/// Output size of [`hash512`] in bytes
pub const HASH512_SIZE: usize = 64;

/// SHA-256 of `msg`
#[inline]
pub fn hash256(msg: &[u8]) -> [u8; HASH256_SIZE] {
    Sha256::digest(msg).into()
}

/// `SHA-256(msg || 0x00) || SHA-256(msg || 0x01)`
pub fn hash512(msg: &[u8]) -> [u8; HASH512_SIZE] {
    let mut out = [0u8; HASH512_SIZE];
    for (counter, half) in out.chunks_exact_mut(HASH256_SIZE).enumerate() {
        let digest = Sha256::new()
            .chain_update(msg)
            .chain_update([counter as u8])
            .finalize();
        half.copy_from_slice(&digest);
    }
    out
}
