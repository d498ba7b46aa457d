//! Error types for the signature crate

use alloc::string::{String, ToString};
use core::fmt;

use blsmpl_algorithms::Error as AlgoError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key
    InvalidKey {
        /// Operation that rejected the key
        context: &'static str,
        /// What was wrong with it
        details: String,
    },

    /// Invalid signature
    InvalidSignature {
        /// Operation that rejected the signature
        context: &'static str,
        /// What was wrong with it
        details: String,
    },

    /// Input had the wrong number of bytes
    InvalidLength {
        /// What was being read
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Aggregation over nothing
    EmptyInput {
        /// Operation that received no input
        context: &'static str,
    },

    /// Encoding error
    Encoding(String),

    /// Invalid parameter
    InvalidParameter(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey { context, details } => {
                write!(f, "Invalid key in {}: {}", context, details)
            }
            Error::InvalidSignature { context, details } => {
                write!(f, "Invalid signature in {}: {}", context, details)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::EmptyInput { context } => write!(f, "Empty input to {}", context),
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Convert from algorithms::error::Error
impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        match err {
            AlgoError::Length {
                context,
                expected,
                actual,
            } => Error::InvalidLength {
                context,
                expected,
                actual,
            },
            AlgoError::EmptyInput { context } => Error::EmptyInput { context },
            AlgoError::Encoding { .. } | AlgoError::NoSquareRoot { .. } => {
                Error::Encoding(err.to_string())
            }
            AlgoError::Parameter { .. } => Error::InvalidParameter(err.to_string()),
            AlgoError::Processing { .. } => Error::Internal(err.to_string()),
        }
    }
}

// Convert to api::Error
impl From<Error> for blsmpl_api::Error {
    fn from(err: Error) -> Self {
        #[cfg(feature = "std")]
        let message = err.to_string();
        match err {
            Error::InvalidKey { context, .. } => blsmpl_api::Error::InvalidKey {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Error::InvalidSignature { context, .. } => blsmpl_api::Error::InvalidSignature {
                context,
                #[cfg(feature = "std")]
                message,
            },
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => blsmpl_api::Error::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::EmptyInput { context } => blsmpl_api::Error::EmptyInput { context },
            Error::Encoding(_) => blsmpl_api::Error::SerializationError {
                context: "encoding",
                #[cfg(feature = "std")]
                message,
            },
            Error::InvalidParameter(_) => blsmpl_api::Error::InvalidParameter {
                context: "sign",
                #[cfg(feature = "std")]
                message,
            },
            Error::Internal(_) => blsmpl_api::Error::Other {
                context: "internal",
                #[cfg(feature = "std")]
                message,
            },
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
