//! Malformed and out-of-group point encodings

use blsmpl_algorithms::{G1Projective, G2Projective};
use blsmpl_tests::vectors::{INVALID_G1, INVALID_G2};

#[test]
fn test_invalid_g1_encodings() {
    for (i, input) in INVALID_G1.iter().enumerate() {
        let bytes = hex::decode(input).unwrap();
        let accepted = G1Projective::from_bytes(&bytes).map(|p| p.is_valid());
        assert!(!matches!(accepted, Ok(true)), "G1 element {} accepted", i);
    }
}

#[test]
fn test_invalid_g2_encodings() {
    for (i, input) in INVALID_G2.iter().enumerate() {
        let bytes = hex::decode(input).unwrap();
        let accepted = G2Projective::from_bytes(&bytes).map(|p| p.is_valid());
        assert!(!matches!(accepted, Ok(true)), "G2 element {} accepted", i);
    }
}

#[test]
fn test_wrong_lengths_are_length_errors() {
    use blsmpl_algorithms::Error;

    for len in [0usize, 47, 49, 96] {
        assert!(matches!(
            G1Projective::from_bytes(&vec![0xc0; len]),
            Err(Error::Length { expected: 48, .. })
        ));
    }
    assert!(matches!(
        G2Projective::from_bytes(&[0xc0; 48]),
        Err(Error::Length { expected: 96, .. })
    ));
}
