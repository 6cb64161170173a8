//! Generation error types
//!
//! The failure surface is deliberately small: bad caller dimensions, or an
//! internal invariant that should be unreachable from valid inputs. An empty
//! seed string is valid (it hashes to 0) and never an error.

use thiserror::Error;

/// Errors produced by outline generation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    /// Width and height must both be positive and finite
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// An internal invariant was violated (misconfigured point counts,
    /// non-finite arithmetic). Never caused by a valid seed/dimension pair.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// Convenience alias for generator results
pub type Result<T> = std::result::Result<T, GenError>;
