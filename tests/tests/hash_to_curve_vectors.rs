//! RFC 9380 hash-to-G2 (BLS12381G2_XMD:SHA-256_SSWU_RO_) end-to-end vector

use blsmpl_algorithms::ec::bls12_381::{Fp, Fp2};
use blsmpl_algorithms::g2_map;

const DST: &[u8] = b"QUUX-V01-CS02-with-BLS12381G2_XMD:SHA-256_SSWU_RO_";

fn fp(hex_str: &str) -> Fp {
    Fp::from_slice(&hex::decode(hex_str).unwrap()).unwrap()
}

#[test]
fn test_g2_map_abcdef() {
    let p = g2_map(b"abcdef0123456789", DST).unwrap();
    assert!(p.is_valid());

    let affine = p.to_affine();
    let x = Fp2::new(
        fp("121982811d2491fde9ba7ed31ef9ca474f0e1501297f68c298e9f4c0028add35aea8bb83d53c08cfc007c1e005723cd0"),
        fp("190d119345b94fbd15497bcba94ecf7db2cbfd1e1fe7da034d26cbba169fb3968288b3fafb265f9ebd380512a71c3f2c"),
    );
    let y = Fp2::new(
        fp("05571a0f8d3c08d094576981f4a3b8eda0a8e771fcdcc8ecceaf1356a6acf17574518acb506e435b639353c2e14827c8"),
        fp("0bb5e7572275c567462d91807de765611490205a941a5a6af3b1691bfe596c31225d3aabdf15faff860cb4ef17c7c3be"),
    );
    assert_eq!(affine.x, x);
    assert_eq!(affine.y, y);
}

#[test]
fn test_g2_map_is_deterministic_and_separated() {
    let a = g2_map(b"message", DST).unwrap();
    assert_eq!(a, g2_map(b"message", DST).unwrap());
    assert_ne!(a, g2_map(b"messagf", DST).unwrap());
    assert_ne!(a, g2_map(b"message", b"ANOTHER-DST").unwrap());
}
