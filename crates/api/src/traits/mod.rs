//! Trait definitions shared across the blsmpl crates

pub mod signature;

pub use signature::SignatureScheme;
