//! Error types for the hashing boundary.

use thiserror::Error;

/// Reasons a digest cannot be produced.
///
/// The permutation and sponge are total; every variant here is a caller contract violation
/// detected before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigestError {
    /// The caller's output buffer is shorter than the digest.
    #[error("output buffer holds {provided} bytes but the digest needs {required}")]
    OutputTooShort {
        /// Digest length in bytes.
        required: usize,
        /// Length of the buffer that was supplied.
        provided: usize,
    },

    /// The rate is zero or larger than the 200-byte state.
    #[error("rate of {rate} bytes is outside 1..=200")]
    InvalidRate { rate: usize },

    /// A zero-length digest was requested.
    #[error("digest length must be at least one byte")]
    EmptyOutput,

    /// The digest would need more than one squeeze permutation.
    #[error("output of {output_len} bytes exceeds the {rate}-byte rate")]
    OutputExceedsRate { output_len: usize, rate: usize },
}

/// Result type alias for digest operations.
pub type DigestResult<T> = core::result::Result<T, DigestError>;
