//! Error types for filter operations.
//!
//! There are exactly two failure modes: rejecting bad construction
//! parameters, and rejecting an item that has no canonical byte encoding.
//! Both are local, recoverable conditions; no operation leaves the filter
//! in a partially-mutated state.
//!
//! # Error Propagation
//!
//! ```
//! use bloomsieve::{FilterError, Result};
//! use bloomsieve::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! fn derive_params(n: usize, p: f64) -> Result<(usize, usize)> {
//!     let m = optimal_bit_count(n, p)?;
//!     let k = optimal_hash_count(m, n)?;
//!     Ok((m, k))
//! }
//! # assert!(derive_params(1000, 0.01).is_ok());
//! ```

use std::fmt;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that can occur when constructing or using a filter.
///
/// `Clone` and `PartialEq` are derived so tests can compare errors directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Construction parameters are invalid.
    ///
    /// Raised when the expected element count is zero, the false positive
    /// rate falls outside the open interval (0, 1), or the derived bit
    /// array size would exceed addressable memory. No filter instance is
    /// created.
    InvalidParameter {
        /// Human-readable description of what was rejected.
        message: String,
    },

    /// The item has no deterministic canonical byte encoding.
    ///
    /// Raised by `insert` and `contains` before any state is touched. The
    /// only built-in encodings that can fail are floating point NaN values,
    /// which have no single canonical bit pattern.
    NonHashableInput {
        /// Why the item could not be encoded.
        reason: String,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { message } => {
                write!(f, "Invalid filter parameters: {}.", message)
            }
            Self::NonHashableInput { reason } => {
                write!(f, "Item cannot be hashed: {}.", reason)
            }
        }
    }
}

impl std::error::Error for FilterError {}

impl FilterError {
    /// Create an `InvalidParameter` error with a formatted message.
    #[must_use]
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a `NonHashableInput` error.
    #[must_use]
    pub fn non_hashable(reason: impl Into<String>) -> Self {
        Self::NonHashableInput {
            reason: reason.into(),
        }
    }
}
