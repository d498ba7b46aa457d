//! The three schemes driven through the shared API trait and error type

use blsmpl_api::{Error, SignatureScheme};
use blsmpl_sign::bls::{AugSchemeMpl, BasicSchemeMpl, PopSchemeMpl};
use blsmpl_tests::{readme_seed_variant, README_SEED};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn two_signers<S: SignatureScheme>() -> Result<bool, Error> {
    let sk1 = S::key_gen(&readme_seed_variant(1))?;
    let sk2 = S::derive_child_sk(&sk1, 7)?;
    let (pk1, pk2) = (S::public_key(&sk1), S::public_key(&sk2));

    let sig1 = S::sign(&sk1, b"first")?;
    let sig2 = S::sign(&sk2, b"second")?;
    let agg = S::aggregate(&[sig1, sig2])?;
    Ok(S::aggregate_verify(
        &[pk1, pk2],
        &[&b"first"[..], &b"second"[..]],
        &agg,
    ))
}

#[test]
fn test_aggregate_through_trait() {
    assert!(two_signers::<BasicSchemeMpl>().unwrap());
    assert!(two_signers::<AugSchemeMpl>().unwrap());
    assert!(two_signers::<PopSchemeMpl>().unwrap());
}

#[test]
fn test_scheme_names_are_distinct() {
    let names = [
        BasicSchemeMpl::name(),
        AugSchemeMpl::name(),
        PopSchemeMpl::name(),
    ];
    assert_ne!(names[0], names[1]);
    assert_ne!(names[1], names[2]);
    assert_ne!(names[0], names[2]);
}

fn unhardened_matches<S: SignatureScheme>() -> bool
where
    S::PublicKey: PartialEq,
{
    let mut rng = ChaCha20Rng::from_seed(README_SEED);
    let (sk, pk) = S::keypair(&mut rng).unwrap();
    let child = S::derive_child_sk_unhardened(&sk, 3).unwrap();
    S::public_key(&child) == S::derive_child_pk_unhardened(&pk, 3)
}

#[test]
fn test_unhardened_through_trait() {
    assert!(unhardened_matches::<BasicSchemeMpl>());
    assert!(unhardened_matches::<AugSchemeMpl>());
    assert!(unhardened_matches::<PopSchemeMpl>());
}

#[test]
fn test_empty_aggregate_maps_to_api_error() {
    let err = <AugSchemeMpl as SignatureScheme>::aggregate(&[]).unwrap_err();
    assert!(matches!(err, Error::EmptyInput { .. }));
}

#[test]
fn test_bad_encoding_maps_to_api_error() {
    let err: Error = blsmpl_algorithms::G1Projective::from_bytes(&[0u8; 47])
        .unwrap_err()
        .into();
    assert!(matches!(err, Error::InvalidLength { .. }));
}
