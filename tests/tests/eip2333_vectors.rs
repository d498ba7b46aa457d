//! EIP-2333 master and hardened child keys

use blsmpl_sign::bls::{derive_child_sk, key_gen, AugSchemeMpl, BasicSchemeMpl, PopSchemeMpl};
use blsmpl_tests::vectors::EIP2333;

#[test]
fn test_eip2333_vectors() {
    for v in EIP2333 {
        let seed = hex::decode(v.seed).unwrap();

        let master = key_gen(&seed).unwrap();
        assert_eq!(master.to_hex(), v.master_sk, "master of seed {}", v.seed);
        assert_eq!(master.to_bytes().len(), 32);

        let child = derive_child_sk(&master, v.child_index).unwrap();
        assert_eq!(child.to_hex(), v.child_sk, "child of seed {}", v.seed);
    }
}

#[test]
fn test_schemes_share_key_tree() {
    let seed = hex::decode(EIP2333[2].seed).unwrap();
    let basic = BasicSchemeMpl::key_gen(&seed).unwrap();
    let aug = AugSchemeMpl::key_gen(&seed).unwrap();
    let pop = PopSchemeMpl::key_gen(&seed).unwrap();
    assert_eq!(basic, aug);
    assert_eq!(aug, pop);

    let index = EIP2333[2].child_index;
    assert_eq!(
        AugSchemeMpl::derive_child_sk(&aug, index).unwrap().to_hex(),
        EIP2333[2].child_sk
    );
    assert_eq!(
        PopSchemeMpl::derive_child_sk(&pop, index).unwrap(),
        BasicSchemeMpl::derive_child_sk(&basic, index).unwrap()
    );
}
