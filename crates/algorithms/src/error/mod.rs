//! Error handling for BLS12-381 primitives

use alloc::borrow::Cow;
#[cfg(feature = "std")]
use alloc::string::ToString;

use core::fmt;

use blsmpl_api::{Error as CoreError, Result as CoreResult};

/// The error type for BLS12-381 primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed encoding: bad flag bits, non-canonical coordinate, bad hex
    Encoding {
        /// What was being decoded
        context: &'static str,
        /// What was wrong with it
        details: &'static str,
    },

    /// The value has no square root in its field
    NoSquareRoot {
        /// Where the root was needed
        context: &'static str,
    },

    /// An operation needing at least one input got none
    EmptyInput {
        /// Operation that received no input
        context: &'static str,
    },

    /// Processing error during cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for BLS12-381 primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Encoding { context, details } => {
                write!(f, "Invalid encoding for {}: {}", context, details)
            }
            Error::NoSquareRoot { context } => {
                write!(f, "No square root exists in {}", context)
            }
            Error::EmptyInput { context } => write!(f, "Empty input to {}", context),
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(_: hex::FromHexError) -> Self {
        Error::Encoding {
            context: "hex string",
            details: "not valid hexadecimal",
        }
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "parameter",
                },
                #[cfg(feature = "std")]
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { context, details } => CoreError::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
            Error::NoSquareRoot { context } => CoreError::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: "point is not on the curve".to_string(),
            },
            Error::EmptyInput { context } => CoreError::EmptyInput { context },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export core error handling traits for convenience
pub use blsmpl_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
