//! The usage walkthrough from the crate documentation, end to end

use blsmpl_algorithms::{G1Projective, G2Projective};
use blsmpl_sign::bls::{AugSchemeMpl, PopSchemeMpl, PrivateKey};
use blsmpl_tests::{readme_seed_variant, README_SEED};

const MESSAGE: &[u8] = &[1, 2, 3, 4, 5];

#[test]
fn test_sign_verify_and_serialize() {
    let sk = AugSchemeMpl::key_gen(&README_SEED).unwrap();
    let pk = sk.g1();
    let signature = AugSchemeMpl::sign(&sk, MESSAGE).unwrap();
    assert!(AugSchemeMpl::verify(&pk, MESSAGE, &signature));

    let sk_from_bytes = PrivateKey::from_bytes(&sk.to_bytes());
    let pk_from_bytes = G1Projective::from_bytes(&pk.to_bytes()).unwrap();
    let signature_from_bytes = G2Projective::from_bytes(&signature.to_bytes()).unwrap();
    assert_eq!(sk, sk_from_bytes);
    assert_eq!(pk, pk_from_bytes);
    assert_eq!(signature, signature_from_bytes);
}

#[test]
fn test_aug_aggregation() {
    let sk1 = AugSchemeMpl::key_gen(&readme_seed_variant(1)).unwrap();
    let sk2 = AugSchemeMpl::key_gen(&readme_seed_variant(2)).unwrap();
    let sk3 = AugSchemeMpl::key_gen(&readme_seed_variant(3)).unwrap();
    let (pk1, pk2, pk3) = (sk1.g1(), sk2.g1(), sk3.g1());

    let message2: &[u8] = &[1, 2, 3, 4, 5, 6, 7];
    let message3: &[u8] = &[100, 2, 254, 88, 90, 45, 23];

    let sig1 = AugSchemeMpl::sign(&sk1, MESSAGE).unwrap();
    let sig2 = AugSchemeMpl::sign(&sk2, message2).unwrap();
    let agg = AugSchemeMpl::aggregate(&[sig1, sig2]).unwrap();
    assert!(AugSchemeMpl::aggregate_verify(
        &[pk1, pk2],
        &[MESSAGE, message2],
        &agg
    ));

    // Aggregates aggregate further
    let sig3 = AugSchemeMpl::sign(&sk3, message3).unwrap();
    let agg_final = AugSchemeMpl::aggregate(&[agg, sig3]).unwrap();
    assert!(AugSchemeMpl::aggregate_verify(
        &[pk1, pk2, pk3],
        &[MESSAGE, message2, message3],
        &agg_final
    ));
}

#[test]
fn test_pop_flow() {
    let sks: Vec<PrivateKey> = (1..=3)
        .map(|i| AugSchemeMpl::key_gen(&readme_seed_variant(i)).unwrap())
        .collect();
    let pks: Vec<G1Projective> = sks.iter().map(PrivateKey::g1).collect();

    for (sk, pk) in sks.iter().zip(&pks) {
        let proof = PopSchemeMpl::pop_prove(sk).unwrap();
        assert!(PopSchemeMpl::pop_verify(pk, &proof));
    }

    let sigs: Vec<G2Projective> = sks
        .iter()
        .map(|sk| PopSchemeMpl::sign(sk, MESSAGE).unwrap())
        .collect();
    let agg = PopSchemeMpl::aggregate(&sigs).unwrap();
    assert!(PopSchemeMpl::fast_aggregate_verify(&pks, MESSAGE, &agg));

    let agg_pk: G1Projective = pks.iter().copied().sum();
    assert!(PopSchemeMpl::verify(&agg_pk, MESSAGE, &agg));

    let agg_sk = PrivateKey::aggregate(&sks);
    assert_eq!(PopSchemeMpl::sign(&agg_sk, MESSAGE).unwrap(), agg);
}

#[test]
fn test_child_keys() {
    let master = AugSchemeMpl::key_gen(&README_SEED).unwrap();
    let child = AugSchemeMpl::derive_child_sk(&master, 152).unwrap();
    let grandchild = AugSchemeMpl::derive_child_sk(&child, 952).unwrap();
    assert_ne!(child, grandchild);

    let master_pk = master.g1();
    let child_u = AugSchemeMpl::derive_child_sk_unhardened(&master, 22);
    let grandchild_u = AugSchemeMpl::derive_child_sk_unhardened(&child_u, 0);
    let child_u_pk = AugSchemeMpl::derive_child_pk_unhardened(&master_pk, 22);
    let grandchild_u_pk = AugSchemeMpl::derive_child_pk_unhardened(&child_u_pk, 0);
    assert_eq!(grandchild_u_pk, grandchild_u.g1());
}

#[test]
fn test_sign_prepend() {
    let sk1 = AugSchemeMpl::key_gen(&readme_seed_variant(1)).unwrap();
    let sk2 = AugSchemeMpl::key_gen(&readme_seed_variant(2)).unwrap();
    let agg_pk = sk1.g1() + sk2.g1();

    let sig1 = AugSchemeMpl::sign_prepend(&sk1, MESSAGE, &agg_pk).unwrap();
    let sig2 = AugSchemeMpl::sign_prepend(&sk2, MESSAGE, &agg_pk).unwrap();
    let agg = AugSchemeMpl::aggregate(&[sig1, sig2]).unwrap();
    assert!(AugSchemeMpl::verify(&agg_pk, MESSAGE, &agg));
}
