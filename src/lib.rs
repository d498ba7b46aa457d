//! # blsmpl
//!
//! Pure Rust BLS signatures over the BLS12-381 curve, in the
//! minimal-pubkey-size arrangement: public keys in G1, signatures in G2.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blsmpl = "0.3"
//! ```
//!
//! ```
//! use blsmpl::prelude::*;
//!
//! let sk = AugSchemeMpl::key_gen(&[1u8; 32])?;
//! let pk = sk.g1();
//! let sig = AugSchemeMpl::sign(&sk, b"hello")?;
//! assert!(AugSchemeMpl::verify(&pk, b"hello", &sig));
//!
//! let restored = G2Projective::from_bytes(&sig.to_bytes())?;
//! assert_eq!(restored, sig);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` impls and richer error messages
//! - `sign` (default): the signature schemes and key tree
//! - `serde`: hex-string serialization of keys and points
//! - `full`: all of the above, plus a `rand` re-export
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`blsmpl-api`]: Error type and the `SignatureScheme` trait
//! - [`blsmpl-algorithms`]: Field tower, curve groups, pairing, hash-to-curve, HKDF
//! - [`blsmpl-sign`]: `PrivateKey`, the Basic, Augmented and Proof-of-Possession
//!   schemes and EIP-2333 key derivation

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use blsmpl_algorithms as algorithms;
pub use blsmpl_api as api;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use blsmpl_sign as sign;

#[cfg(feature = "rand")]
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for blsmpl users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result, ResultExt};

    // Core trait
    pub use crate::api::SignatureScheme;

    // Group elements and scalars
    pub use crate::algorithms::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};

    #[cfg(feature = "sign")]
    pub use crate::sign::bls::{AugSchemeMpl, BasicSchemeMpl, PopSchemeMpl, PrivateKey};

    pub use zeroize::Zeroize;
}
