//! BLS12-381 primitives
//!
//! This crate provides the algebra beneath BLS signatures: the Fp, Fp2,
//! Fp6 and Fp12 tower, the G1 and G2 groups with their compressed
//! encodings, the optimal Ate pairing and the RFC 9380 hash to G2, plus
//! the SHA-256 and HKDF helpers that key derivation is built from.
//! The library is usable in both `std` and `no_std` environments; an
//! allocator is always required.
//!
//! # Example
//!
//! ```
//! use blsmpl_algorithms::ec::bls12_381::{ate_pairing, G1Projective, G2Projective, Scalar};
//!
//! let a = Scalar::from(6u64);
//! let p = G1Projective::generator();
//! let q = G2Projective::generator();
//! assert_eq!(ate_pairing(&(p * a), &q), ate_pairing(&p, &(q * a)));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// SHA-256 helpers
pub mod hash;
pub use hash::{hash256, hash512};

// HKDF-SHA256
pub mod kdf;
pub use kdf::{expand, extract, extract_expand};

// Curve arithmetic, pairing and hash-to-curve
pub mod ec;
pub use ec::bls12_381::{
    g2_map, G1Affine, G1Projective, G2Affine, G2Projective, Scalar, BLS_X, BLS_X_IS_NEGATIVE,
};
