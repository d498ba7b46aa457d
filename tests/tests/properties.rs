//! Property-based tests for the algebraic laws the library relies on

use blsmpl_algorithms::ec::bls12_381::{expand_message_xmd, Fp, Fp12};
use blsmpl_algorithms::{G1Projective, G2Projective, Scalar};
use blsmpl_sign::bls::{AugSchemeMpl, PopSchemeMpl, PrivateKey};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;

fn scalar(seed: u64) -> Scalar {
    Scalar::random(ChaCha20Rng::seed_from_u64(seed))
}

proptest! {
    #[test]
    fn private_key_bytes_roundtrip(bytes in any::<[u8; 32]>()) {
        let sk = PrivateKey::from_bytes(&bytes);
        prop_assert_eq!(PrivateKey::from_bytes(&sk.to_bytes()), sk.clone());
        prop_assert_eq!(PrivateKey::from_hex(&sk.to_hex()).unwrap(), sk);
    }

    #[test]
    fn fp_inverse_identity(seed in any::<u64>()) {
        let x = Fp::random(ChaCha20Rng::seed_from_u64(seed));
        prop_assume!(!bool::from(x.is_zero()));
        let inv = Option::<Fp>::from(x.invert()).unwrap();
        prop_assert_eq!(x * inv, Fp::one());
        prop_assert_eq!(Option::<Fp>::from(inv.invert()).unwrap(), x);
    }

    #[test]
    fn fp_bytes_roundtrip(seed in any::<u64>()) {
        let x = Fp::random(ChaCha20Rng::seed_from_u64(seed));
        prop_assert_eq!(Fp::from_slice(&x.to_bytes()).unwrap(), x);
    }

    #[test]
    fn scalar_field_laws(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let (a, b, c) = (scalar(a), scalar(b), scalar(c));
        prop_assert_eq!(a + (-a), Scalar::zero());
        prop_assert_eq!((a * b) * c, a * (b * c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn xmd_output_length(len in 1usize..=2048, msg in prop::collection::vec(any::<u8>(), 0..64)) {
        let out = expand_message_xmd::<Sha256>(&msg, b"PROPTEST-DST", len).unwrap();
        prop_assert_eq!(out.len(), len);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn g1_roundtrip_and_negation(seed in any::<u64>()) {
        let p = G1Projective::generator() * scalar(seed);
        prop_assert_eq!(G1Projective::from_bytes(&p.to_bytes()).unwrap(), p);
        prop_assert!((p + (-p)).is_identity());
        prop_assert_eq!(p.to_affine().to_jacobian(), p);
    }

    #[test]
    fn g2_roundtrip_and_negation(seed in any::<u64>()) {
        let q = G2Projective::generator() * scalar(seed);
        prop_assert_eq!(G2Projective::from_bytes(&q.to_bytes()).unwrap(), q);
        prop_assert!((q - q).is_identity());
    }

    #[test]
    fn scalar_multiplication_distributes(a in any::<u64>(), b in any::<u64>()) {
        let (a, b) = (scalar(a), scalar(b));
        let g = G1Projective::generator();
        prop_assert_eq!(g * (a + b), g * a + g * b);
        prop_assert_eq!((g * a) * b, g * (a * b));
    }

    #[test]
    fn private_key_aggregation_is_homomorphic(seeds in prop::collection::vec(any::<[u8; 32]>(), 1..4)) {
        let sks: Vec<PrivateKey> = seeds
            .iter()
            .map(|s| AugSchemeMpl::key_gen(s).unwrap())
            .collect();
        let agg = PrivateKey::aggregate(&sks);

        let pk_sum: G1Projective = sks.iter().map(PrivateKey::g1).sum();
        prop_assert_eq!(agg.g1(), pk_sum);

        let sigs: Vec<G2Projective> = sks
            .iter()
            .map(|sk| PopSchemeMpl::sign(sk, b"homomorphic").unwrap())
            .collect();
        prop_assert_eq!(
            PopSchemeMpl::sign(&agg, b"homomorphic").unwrap(),
            PopSchemeMpl::aggregate(&sigs).unwrap()
        );
    }

    #[test]
    fn unhardened_child_keys_match(seed in any::<[u8; 32]>(), index in any::<u32>()) {
        let sk = AugSchemeMpl::key_gen(&seed).unwrap();
        let child = AugSchemeMpl::derive_child_sk_unhardened(&sk, index);
        prop_assert_eq!(
            AugSchemeMpl::derive_child_pk_unhardened(&sk.g1(), index),
            child.g1()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    #[test]
    fn sign_then_verify(seed in any::<[u8; 32]>(), msg in prop::collection::vec(any::<u8>(), 0..128)) {
        let sk = AugSchemeMpl::key_gen(&seed).unwrap();
        let sig = AugSchemeMpl::sign(&sk, &msg).unwrap();
        prop_assert!(AugSchemeMpl::verify(&sk.g1(), &msg, &sig));
    }

    #[test]
    fn pairing_is_bilinear(a in any::<u64>(), b in any::<u64>()) {
        use blsmpl_algorithms::ec::bls12_381::ate_pairing;

        let (a, b) = (scalar(a), scalar(b));
        let lhs = ate_pairing(&(G1Projective::generator() * a), &(G2Projective::generator() * b));
        let rhs = ate_pairing(&(G1Projective::generator() * (a * b)), &G2Projective::generator());
        prop_assert_eq!(lhs, rhs);
        prop_assert_ne!(lhs, Fp12::one());
    }
}
