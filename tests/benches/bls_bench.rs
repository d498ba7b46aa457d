//! End-to-end benchmarks over the published interoperability vectors

use blsmpl_sign::bls::{derive_child_sk, key_gen, AugSchemeMpl, BasicSchemeMpl, PrivateKey};
use blsmpl_tests::vectors::EIP2333;
use blsmpl_tests::{readme_seed_variant, README_SEED};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_eip2333(c: &mut Criterion) {
    let mut group = c.benchmark_group("eip2333");
    group.sample_size(20);

    let seed = hex::decode(EIP2333[0].seed).unwrap();
    group.bench_function("master", |b| b.iter(|| black_box(key_gen(&seed).unwrap())));

    let master = key_gen(&seed).unwrap();
    let index = EIP2333[0].child_index;
    group.bench_function("hardened_child", |b| {
        b.iter(|| black_box(derive_child_sk(&master, index).unwrap()))
    });

    group.finish();
}

fn bench_walkthrough(c: &mut Criterion) {
    let mut group = c.benchmark_group("walkthrough");
    group.sample_size(10);

    let sks: Vec<PrivateKey> = (1..=3)
        .map(|i| AugSchemeMpl::key_gen(&readme_seed_variant(i)).unwrap())
        .collect();
    let pks: Vec<_> = sks.iter().map(PrivateKey::g1).collect();
    let messages: [&[u8]; 3] = [&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5, 6, 7], &[100, 2, 254, 88, 90, 45, 23]];
    let sigs: Vec<_> = sks
        .iter()
        .zip(messages)
        .map(|(sk, m)| AugSchemeMpl::sign(sk, m).unwrap())
        .collect();
    let agg = AugSchemeMpl::aggregate(&sigs).unwrap();

    group.bench_function("aug_aggregate_verify_3", |b| {
        b.iter(|| black_box(AugSchemeMpl::aggregate_verify(&pks, &messages, &agg)))
    });

    let sk = BasicSchemeMpl::key_gen(&README_SEED).unwrap();
    group.bench_function("basic_sign_verify", |b| {
        b.iter(|| {
            let sig = BasicSchemeMpl::sign(&sk, messages[0]).unwrap();
            black_box(BasicSchemeMpl::verify(&sk.g1(), messages[0], &sig))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_eip2333, bench_walkthrough);
criterion_main!(benches);
