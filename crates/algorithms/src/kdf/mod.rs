//! Key derivation functions
//!
//! Only HKDF-SHA256 is needed: BLS key generation and EIP-2333 both sit on
//! top of it.

pub mod hkdf;

pub use self::hkdf::{expand, extract, extract_expand, HASH_LEN, MAX_OUTPUT_LEN};
