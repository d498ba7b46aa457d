//! Signatures published with `py_ecc`, one per scheme plus aggregates

use blsmpl_algorithms::G2Projective;
use blsmpl_sign::bls::{AugSchemeMpl, BasicSchemeMpl, PopSchemeMpl, PrivateKey};

const MESSAGE: &[u8] = &[3, 1, 4, 1, 5, 9];

fn secret_keys() -> (PrivateKey, PrivateKey) {
    let secret2: Vec<u8> = (0..32u32).map(|i| ((i * 314159) % 256) as u8).collect();
    (PrivateKey::from_bytes(&[1u8; 32]), PrivateKey::from_bytes(&secret2))
}

fn check(sig: &G2Projective, expected: &str) {
    assert_eq!(sig.to_bytes().as_slice(), hex::decode(expected).unwrap().as_slice());
}

#[test]
fn test_basic() {
    let (sk1, sk2) = secret_keys();
    let sig1 = BasicSchemeMpl::sign(&sk1, MESSAGE).unwrap();
    let sig2 = BasicSchemeMpl::sign(&sk2, MESSAGE).unwrap();
    let agg = BasicSchemeMpl::aggregate(&[sig1, sig2]).unwrap();

    check(
        &sig1,
        "96ba34fac33c7f129d602a0bc8a3d43f9abc014eceaab7359146b4b150e57b80\
         8645738f35671e9e10e0d862a30cab70074eb5831d13e6a5b162d01eebe687d0\
         164adbd0a864370a7c222a2768d7704da254f1bf1823665bc2361f9dd8c00e99",
    );
    check(
        &sig2,
        "a402790932130f766af11ba716536683d8c4cfa51947e4f9081fedd692d6dc0c\
         ac5b904bee5ea6e25569e36d7be4ca59069a96e34b7f700758b716f9494aaa59\
         a96e74d14a3b552a9a6bc129e717195b9d6006fd6d5cef4768c022e0f7316abf",
    );
    check(
        &agg,
        "987cfd3bcd62280287027483f29c55245ed831f51dd6bd999a6ff1a1f1f1f0b6\
         47778b0167359c71505558a76e158e66181ee5125905a642246b01e7fa5ee53d\
         68a4fe9bfb29a8e26601f0b9ad577ddd18876a73317c216ea61f430414ec51c5",
    );

    // One message under two keys is never a valid Basic aggregate
    assert!(!BasicSchemeMpl::aggregate_verify(
        &[sk1.g1(), sk2.g1()],
        &[MESSAGE, MESSAGE],
        &agg
    ));
}

#[test]
fn test_aug() {
    let (sk1, sk2) = secret_keys();
    let sig1 = AugSchemeMpl::sign(&sk1, MESSAGE).unwrap();
    let sig2 = AugSchemeMpl::sign(&sk2, MESSAGE).unwrap();
    let agg = AugSchemeMpl::aggregate(&[sig1, sig2]).unwrap();

    check(
        &sig1,
        "8180f02ccb72e922b152fcedbe0e1d195210354f70703658e8e08cbebf11d497\
         0eab6ac3ccf715f3fb876df9a9797abd0c1af61aaeadc92c2cfe5c0a56c146cc\
         8c3f7151a073cf5f16df38246724c4aed73ff30ef5daa6aacaed1a26ecaa336b",
    );
    check(
        &sig2,
        "99111eeafb412da61e4c37d3e806c6fd6ac9f3870e54da9222ba4e494822c5b7\
         656731fa7a645934d04b559e9261b86201bbee57055250a459a2da10e51f9c1a\
         6941297ffc5d970a557236d0bdeb7cf8ff18800b08633871a0f0a7ea42f47480",
    );
    check(
        &agg,
        "8c5d03f9dae77e19a5945a06a214836edb8e03b851525d84b9de6440e68fc0ca\
         7303eeed390d863c9b55a8cf6d59140a01b58847881eb5af67734d44b2555646\
         c6616c39ab88d253299acc1eb1b19ddb9bfcbe76e28addf671d116c052bb1847",
    );

    assert!(AugSchemeMpl::aggregate_verify(
        &[sk1.g1(), sk2.g1()],
        &[MESSAGE, MESSAGE],
        &agg
    ));
}

#[test]
fn test_pop() {
    let (sk1, sk2) = secret_keys();
    let sig1 = PopSchemeMpl::sign(&sk1, MESSAGE).unwrap();
    let sig2 = PopSchemeMpl::sign(&sk2, MESSAGE).unwrap();
    let agg = PopSchemeMpl::aggregate(&[sig1, sig2]).unwrap();

    check(
        &sig1,
        "9550fb4e7f7e8cc4a90be8560ab5a798b0b23000b6a54a2117520210f986f3f2\
         81b376f259c0b78062d1eb3192b3d9bb049f59ecc1b03a7049eb665e0df36494\
         ae4cb5f1136ccaeefc9958cb30c3333d3d43f07148c386299a7b1bfc0dc5cf7c",
    );
    check(
        &sig2,
        "a69036bc11ae5efcbf6180afe39addde7e27731ec40257bfdc3c37f17b8df683\
         06a34ebd10e9e32a35253750df5c87c2142f8207e8d5654712b4e554f585fb68\
         46ff3804e429a9f8a1b4c56b75d0869ed67580d789870babe2c7c8a9d51e7b2a",
    );
    check(
        &agg,
        "a4ea742bcdc1553e9ca4e560be7e5e6c6efa6a64dddf9ca3bb2854233d85a6aa\
         c1b76ec7d103db4e33148b82af9923db05934a6ece9a7101cd8a9d47ce279780\
         56b0f5900021818c45698afdd6cf8a6b6f7fee1f0b43716f55e413d4b87a6039",
    );

    assert!(PopSchemeMpl::fast_aggregate_verify(
        &[sk1.g1(), sk2.g1()],
        MESSAGE,
        &agg
    ));
}
