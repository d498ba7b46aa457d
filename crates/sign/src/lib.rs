//! BLS signature schemes
//!
//! This crate implements the Basic, Augmented and Proof-of-Possession BLS
//! signature schemes over BLS12-381 together with EIP-2333 hierarchical
//! key derivation. Each scheme implements
//! [`blsmpl_api::SignatureScheme`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bls;
pub mod error;

pub use bls::{AugSchemeMpl, BasicSchemeMpl, PopSchemeMpl, PrivateKey};
pub use error::{Error, Result};
