//! Public API traits and types for the blsmpl library
//!
//! This crate provides the public API surface shared by the blsmpl crates:
//! the error type every fallible operation returns and the trait the three
//! BLS signature schemes implement.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::SignatureScheme;

// Re-export trait modules for direct access
pub use traits::signature;
