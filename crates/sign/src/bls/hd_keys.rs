//! Deterministic key generation and the EIP-2333 key tree
//!
//! Hardened children go through a Lamport one-time key built from the
//! parent secret, so nothing about them follows from public data.
//! Unhardened children are offset by a hash of the parent public key,
//! which lets the child public key be computed from the parent public key
//! alone.

use alloc::vec::Vec;

use blsmpl_algorithms::{extract_expand, hash256, G1Projective, G2Projective};
use zeroize::Zeroizing;

use super::PrivateKey;
use crate::error::Result;

/// Salt of the BLS `KeyGen` extraction
pub const KEYGEN_SALT: &[u8] = b"BLS-SIG-KEYGEN-SALT-";

/// Bytes of key material drawn before reduction mod n
const KEYGEN_OKM_LEN: usize = 48;

/// Chunks in one half of a Lamport key
const LAMPORT_CHUNKS: usize = 255;

const LAMPORT_CHUNK_LEN: usize = 32;

/// BLS `KeyGen`: HKDF over `seed || 0x00`, 48 bytes of output reduced mod n
pub fn key_gen(seed: &[u8]) -> Result<PrivateKey> {
    let mut ikm = Zeroizing::new(Vec::with_capacity(seed.len() + 1));
    ikm.extend_from_slice(seed);
    ikm.push(0);

    let info = (KEYGEN_OKM_LEN as u16).to_be_bytes();
    let okm = extract_expand(KEYGEN_OKM_LEN, &ikm, KEYGEN_SALT, &info)?;
    Ok(PrivateKey::from_bytes(&okm))
}

/// 255 chunks of 32 bytes of Lamport secret key
fn ikm_to_lamport_sk(ikm: &[u8], salt: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    Ok(extract_expand(LAMPORT_CHUNKS * LAMPORT_CHUNK_LEN, ikm, salt, &[])?)
}

/// Compressed Lamport public key of the parent at `index`
fn parent_sk_to_lamport_pk(parent: &PrivateKey, index: u32) -> Result<[u8; 32]> {
    let salt = index.to_be_bytes();
    let ikm = Zeroizing::new(parent.to_bytes());
    let not_ikm = Zeroizing::new(ikm.map(|b| b ^ 0xff));

    let lamport0 = ikm_to_lamport_sk(ikm.as_slice(), &salt)?;
    let lamport1 = ikm_to_lamport_sk(not_ikm.as_slice(), &salt)?;

    let mut lamport_pk = Vec::with_capacity(2 * LAMPORT_CHUNKS * 32);
    for chunk in lamport0
        .chunks_exact(LAMPORT_CHUNK_LEN)
        .chain(lamport1.chunks_exact(LAMPORT_CHUNK_LEN))
    {
        lamport_pk.extend_from_slice(&hash256(chunk));
    }
    Ok(hash256(&lamport_pk))
}

/// Hardened child secret key
pub fn derive_child_sk(parent: &PrivateKey, index: u32) -> Result<PrivateKey> {
    let compressed = Zeroizing::new(parent_sk_to_lamport_pk(parent, index)?);
    key_gen(compressed.as_slice())
}

fn unhardened_offset(parent_pk: &[u8], index: u32) -> PrivateKey {
    let mut buf = Vec::with_capacity(parent_pk.len() + 4);
    buf.extend_from_slice(parent_pk);
    buf.extend_from_slice(&index.to_be_bytes());
    PrivateKey::from_bytes(&hash256(&buf))
}

/// Unhardened child secret key: parent plus a hash of the parent public key
pub fn derive_child_sk_unhardened(parent: &PrivateKey, index: u32) -> PrivateKey {
    let offset = unhardened_offset(&parent.g1().to_bytes(), index);
    PrivateKey::from_scalar(*offset.scalar() + *parent.scalar())
}

/// Public key of [`derive_child_sk_unhardened`], from the parent public key
pub fn derive_child_g1_unhardened(parent: &G1Projective, index: u32) -> G1Projective {
    let offset = unhardened_offset(&parent.to_bytes(), index);
    *parent + G1Projective::generator() * *offset.scalar()
}

/// The G2 counterpart of [`derive_child_g1_unhardened`]
pub fn derive_child_g2_unhardened(parent: &G2Projective, index: u32) -> G2Projective {
    let offset = unhardened_offset(&parent.to_bytes(), index);
    *parent + G2Projective::generator() * *offset.scalar()
}
