//! Interoperability vectors and shared fixtures for the blsmpl test suite
//!
//! The integration tests under `tests/` check the library against values
//! published by other BLS implementations (Chia's `bls-signatures`,
//! `py_ecc`), by EIP-2333 and by RFC 5869. The tables live here so the
//! benches and several test files can share them.

pub mod vectors;

/// Seed used throughout the usage walkthrough tests
pub const README_SEED: [u8; 32] = [
    0, 50, 6, 244, 24, 199, 1, 25, 52, 88, 192, 19, 18, 12, 89, 6, 220, 18, 102, 58, 209, 82, 12,
    62, 89, 110, 182, 9, 44, 20, 254, 22,
];

/// [`README_SEED`] with its first byte replaced by `first`
pub fn readme_seed_variant(first: u8) -> [u8; 32] {
    let mut seed = README_SEED;
    seed[0] = first;
    seed
}
