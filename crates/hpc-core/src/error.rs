//! Error types for the numeric kernels
//!
//! Provides a unified error type for all hpc-kernels crates. Every kernel
//! validates its inputs before touching a buffer, so each variant describes a
//! failure that happened before any partial result existed.

use thiserror::Error;

/// Core error type for kernel calls
#[derive(Error, Debug)]
pub enum Error {
    /// Argument outside the kernel's domain (zero partitions, non-finite bounds, bad config)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operand sequences of differing length
    #[error("Length mismatch: left operand has {left} elements, right operand has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A native buffer could not be acquired
    #[error("Allocation failure: could not acquire a buffer of {bytes} bytes")]
    AllocationFailure { bytes: usize },

    /// Host value that cannot be marshalled into a native buffer
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Malformed call payload
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an out-of-domain argument
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an error for operands of differing length
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Create an error for a failed buffer acquisition
    pub fn allocation_failure(bytes: usize) -> Self {
        log::error!("buffer acquisition of {bytes} bytes failed");
        Self::AllocationFailure { bytes }
    }

    /// Create an error for a host element that is not a number
    pub fn not_numeric(index: usize, found: &str) -> Self {
        Self::InvalidInput(format!("element {index} is not a number (found {found})"))
    }
}

/// Fail with `LengthMismatch` unless both lengths agree
#[inline]
pub fn ensure_same_length(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::length_mismatch(left, right));
    }
    Ok(())
}
