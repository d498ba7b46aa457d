//! Message expansion from RFC 9380, section 5.3.

use alloc::vec;
use alloc::vec::Vec;

use digest::crypto_common::BlockSizeUser;
use digest::{Digest, ExtendableOutput, Update, XofReader};

use crate::error::{Error, Result};

/// Longest domain separation tag that fits its one-byte length prefix
const MAX_DST_LENGTH: usize = 255;

/// Longest output expand_message_xmd can produce, in digest blocks
const MAX_ELL: usize = 255;

fn check_dst(dst: &[u8]) -> Result<()> {
    if dst.len() > MAX_DST_LENGTH {
        return Err(Error::param("dst", "domain separation tag too long"));
    }
    Ok(())
}

/// `expand_message_xmd` over a fixed-output hash such as SHA-256.
///
/// ```text
/// b_0 = H(Z_pad ‖ msg ‖ I2OSP(len, 2) ‖ 0x00 ‖ DST')
/// b_1 = H(b_0 ‖ 0x01 ‖ DST')
/// b_i = H((b_0 ⊕ b_{i-1}) ‖ I2OSP(i, 1) ‖ DST')
/// ```
///
/// where DST' = DST ‖ I2OSP(len(DST), 1). Fails when more than 255 blocks
/// would be needed.
pub fn expand_message_xmd<H>(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>>
where
    H: Digest + BlockSizeUser,
{
    check_dst(dst)?;

    let b_in_bytes = <H as Digest>::output_size();
    if len_in_bytes > u16::MAX as usize || len_in_bytes.div_ceil(b_in_bytes) > MAX_ELL {
        return Err(Error::param("len_in_bytes", "requested output too long"));
    }
    let ell = len_in_bytes.div_ceil(b_in_bytes);

    let dst_len = [dst.len() as u8];
    let z_pad = vec![0u8; H::block_size()];

    let b_0 = H::new()
        .chain_update(&z_pad)
        .chain_update(msg)
        .chain_update((len_in_bytes as u16).to_be_bytes())
        .chain_update([0u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    let mut b_i = H::new()
        .chain_update(&b_0)
        .chain_update([1u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    let mut uniform_bytes = Vec::with_capacity(ell * b_in_bytes);
    uniform_bytes.extend_from_slice(&b_i);

    for i in 2..=ell {
        let xored: Vec<u8> = b_0.iter().zip(b_i.iter()).map(|(a, b)| a ^ b).collect();
        b_i = H::new()
            .chain_update(&xored)
            .chain_update([i as u8])
            .chain_update(dst)
            .chain_update(dst_len)
            .finalize();
        uniform_bytes.extend_from_slice(&b_i);
    }

    uniform_bytes.truncate(len_in_bytes);
    Ok(uniform_bytes)
}

/// `expand_message_xof` over an extendable-output function such as SHAKE-256:
/// the first `len_in_bytes` bytes of XOF(msg ‖ I2OSP(len, 2) ‖ DST ‖ I2OSP(len(DST), 1)).
pub fn expand_message_xof<H>(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>>
where
    H: Default + Update + ExtendableOutput,
{
    check_dst(dst)?;
    if len_in_bytes > u16::MAX as usize {
        return Err(Error::param("len_in_bytes", "requested output too long"));
    }

    let mut reader = H::default()
        .chain(msg)
        .chain((len_in_bytes as u16).to_be_bytes())
        .chain(dst)
        .chain([dst.len() as u8])
        .finalize_xof();

    let mut out = vec![0u8; len_in_bytes];
    reader.read(&mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::Sha256;
    use sha3::Shake256;

    const DST: &[u8] = b"QUUX-V01-CS02-with-expander-SHA256-128";

    #[test]
    fn test_xmd_rfc_vectors() {
        // RFC 9380, appendix K.1
        let out = expand_message_xmd::<Sha256>(b"", DST, 0x20).unwrap();
        assert_eq!(
            hex::encode(out),
            "68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235"
        );

        let out = expand_message_xmd::<Sha256>(b"abc", DST, 0x20).unwrap();
        assert_eq!(
            hex::encode(out),
            "d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615"
        );
    }

    #[test]
    fn test_xmd_lengths() {
        for len in [1usize, 31, 32, 33, 128, 255 * 32] {
            assert_eq!(expand_message_xmd::<Sha256>(b"m", b"d", len).unwrap().len(), len);
        }

        // Prefixes agree across lengths only up to the first block, since
        // the length is hashed into b_0
        let a = expand_message_xmd::<Sha256>(b"m", b"d", 64).unwrap();
        let b = expand_message_xmd::<Sha256>(b"m", b"d", 96).unwrap();
        assert_ne!(a[..32], b[..32]);
    }

    #[test]
    fn test_xmd_limits() {
        assert!(expand_message_xmd::<Sha256>(b"m", b"d", 255 * 32 + 1).is_err());
        assert!(expand_message_xmd::<Sha256>(b"m", &[0u8; 256], 32).is_err());
        assert!(expand_message_xmd::<Sha256>(b"m", b"d", usize::MAX).is_err());
        assert!(expand_message_xof::<Shake256>(b"m", b"d", usize::MAX).is_err());
    }

    #[test]
    fn test_xof() {
        let dst = b"QUUX-V01-CS02-with-expander-SHAKE256";
        let out = expand_message_xof::<Shake256>(b"", dst, 0x20).unwrap();
        assert_eq!(
            hex::encode(out),
            "2ffc05c48ed32b95d72e807f6eab9f7530dd1c2f013914c8fed38c5ccc15ad76"
        );

        let long = expand_message_xof::<Shake256>(b"abc", dst, 200).unwrap();
        assert_eq!(long.len(), 200);
        assert!(expand_message_xof::<Shake256>(b"abc", &[1u8; 256], 32).is_err());
    }
}
