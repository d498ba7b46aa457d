//! Vectors published with Chia's `bls-signatures`

use blsmpl_algorithms::{G1Projective, G2Projective};
use blsmpl_sign::bls::{BasicSchemeMpl, PopSchemeMpl, PrivateKey};

fn g2(hex_str: &str) -> G2Projective {
    G2Projective::from_hex(hex_str).unwrap()
}

struct Keys {
    sk1: PrivateKey,
    sk2: PrivateKey,
}

fn keys() -> Keys {
    Keys {
        sk1: BasicSchemeMpl::key_gen(&[0u8; 32]).unwrap(),
        sk2: BasicSchemeMpl::key_gen(&[1u8; 32]).unwrap(),
    }
}

#[test]
fn test_keys() {
    let Keys { sk1, .. } = keys();
    assert_eq!(
        sk1.to_hex(),
        "4a353be3dac091a0a7e640620372f5e1e2e4401717c1e79cac6ffba8f6905604"
    );
    assert_eq!(
        sk1.g1().to_hex(),
        "85695fcbc06cc4c4c9451f4dce21cbf8de3e5a13bf48f44cdbb18e2038ba7b8b\
         b1632d7911ef1e2e08749bddbf165352"
    );
}

#[test]
fn test_basic_signatures_and_aggregate() {
    let Keys { sk1, sk2 } = keys();
    let msg1: &[u8] = &[7, 8, 9];
    let msg2: &[u8] = &[10, 11, 12];

    let sig1 = BasicSchemeMpl::sign(&sk1, msg1).unwrap();
    let sig2 = BasicSchemeMpl::sign(&sk2, msg2).unwrap();
    assert_eq!(
        sig1.to_hex(),
        "b8faa6d6a3881c9fdbad803b170d70ca5cbf1e6ba5a586262df368c75acd1d1f\
         fa3ab6ee21c71f844494659878f5eb230c958dd576b08b8564aad2ee0992e85a\
         1e565f299cd53a285de729937f70dc176a1f01432129bb2b94d3d5031f8065a1"
    );
    assert_eq!(
        sig2.to_hex(),
        "a9c4d3e689b82c7ec7e838dac2380cb014f9a08f6cd6ba044c263746e39a8f7a\
         60ffee4afb78f146c2e421360784d58f0029491e3bd8ab84f0011d258471ba4e\
         87059de295d9aba845c044ee83f6cf2411efd379ef38bf4cf41d5f3c0ae1205d"
    );

    let agg = BasicSchemeMpl::aggregate(&[sig1, sig2]).unwrap();
    assert_eq!(
        agg,
        g2("aee003c8cdaf3531b6b0ca354031b0819f7586b5846796615aee8108fec75ef8\
            38d181f9d244a94d195d7b0231d4afcf06f27f0cc4d3c72162545c240de7d503\
            4a7ef3a2a03c0159de982fbc2e7790aeb455e27beae91d64e077c70b5506dea3")
    );
    assert!(BasicSchemeMpl::aggregate_verify(
        &[sk1.g1(), sk2.g1()],
        &[msg1, msg2],
        &agg
    ));
}

#[test]
fn test_basic_aggregate_with_repeated_signer() {
    let Keys { sk1, sk2 } = keys();
    let msg3: &[u8] = &[1, 2, 3];
    let msg4: &[u8] = &[1, 2, 3, 4];
    let msg5: &[u8] = &[1, 2];

    let sigs = [
        BasicSchemeMpl::sign(&sk1, msg3).unwrap(),
        BasicSchemeMpl::sign(&sk1, msg4).unwrap(),
        BasicSchemeMpl::sign(&sk2, msg5).unwrap(),
    ];
    let agg = BasicSchemeMpl::aggregate(&sigs).unwrap();
    assert_eq!(
        agg.to_hex(),
        "a0b1378d518bea4d1100adbc7bdbc4ff64f2c219ed6395cd36fe5d2aa44a4b8e\
         710b607afd965e505a5ac3283291b75413d09478ab4b5cfbafbeea366de2d0c0\
         bcf61deddaa521f6020460fd547ab37659ae207968b545727beba0a3c5572b9c"
    );

    let pks: [G1Projective; 3] = [sk1.g1(), sk1.g1(), sk2.g1()];
    assert!(BasicSchemeMpl::aggregate_verify(&pks, &[msg3, msg4, msg5], &agg));
    // Messages signed by the same key may be listed in either order
    assert!(BasicSchemeMpl::aggregate_verify(&pks, &[msg4, msg3, msg5], &agg));
    // but moving a message to a different signer breaks the aggregate
    assert!(!BasicSchemeMpl::aggregate_verify(&pks, &[msg5, msg4, msg3], &agg));
    assert!(!BasicSchemeMpl::aggregate_verify(
        &[sk1.g1(), sk2.g1(), sk1.g1()],
        &[msg3, msg4, msg5],
        &agg
    ));
}

#[test]
fn test_pop_proof() {
    let sk = PopSchemeMpl::key_gen(&[4u8; 32]).unwrap();
    let proof = PopSchemeMpl::pop_prove(&sk).unwrap();
    assert_eq!(
        proof.to_hex(),
        "84f709159435f0dc73b3e8bf6c78d85282d19231555a8ee3b6e2573aaf66872d\
         9203fefa1ef700e34e7c3f3fb28210100558c6871c53f1ef6055b9f06b0d1abe\
         22ad584ad3b957f3018a8f58227c6c716b1e15791459850f2289168fa0cf9115"
    );
    assert!(PopSchemeMpl::pop_verify(&sk.g1(), &proof));
}
