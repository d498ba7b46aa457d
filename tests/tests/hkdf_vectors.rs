//! RFC 5869 HKDF-SHA256 vectors and the BLS key-generation KDF built on it

use blsmpl_algorithms::kdf::MAX_OUTPUT_LEN;
use blsmpl_algorithms::{expand, extract, extract_expand, hash256, hash512};
use blsmpl_tests::vectors::HKDF;
use sha2::{Digest, Sha256};

#[test]
fn test_hkdf_vectors() {
    for (i, v) in HKDF.iter().enumerate() {
        let ikm = hex::decode(v.ikm).unwrap();
        let salt = hex::decode(v.salt).unwrap();
        let info = hex::decode(v.info).unwrap();

        let prk = extract(&salt, &ikm);
        assert_eq!(hex::encode(prk), v.prk, "prk of case {}", i);

        let okm = expand(v.length, &prk, &info).unwrap();
        assert_eq!(okm.len(), v.length);
        assert_eq!(hex::encode(&okm[..]), v.okm, "okm of case {}", i);

        let direct = extract_expand(v.length, &ikm, &salt, &info).unwrap();
        assert_eq!(&direct[..], &okm[..]);
    }
}

#[test]
fn test_expand_output_limit() {
    let prk = extract(b"salt", b"ikm");
    assert_eq!(expand(MAX_OUTPUT_LEN, &prk, b"").unwrap().len(), 255 * 32);
    assert!(expand(MAX_OUTPUT_LEN + 1, &prk, b"").is_err());
}

#[test]
fn test_hash_helpers_match_sha256() {
    let msg = b"blsmpl";
    assert_eq!(hash256(msg).as_slice(), Sha256::digest(msg).as_slice());

    let wide = hash512(msg);
    let lo = Sha256::new().chain_update(msg).chain_update([0u8]).finalize();
    let hi = Sha256::new().chain_update(msg).chain_update([1u8]).finalize();
    assert_eq!(&wide[..32], lo.as_slice());
    assert_eq!(&wide[32..], hi.as_slice());
}
