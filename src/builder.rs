//! Fluent builder carrying the crate's default sizing.
//!
//! Both knobs have conventional defaults (1000 expected elements at a 1%
//! false positive rate), so the builder starts complete and every setter
//! is optional.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::FilterBuilder;
//!
//! // Defaults only
//! let filter = FilterBuilder::new().build().unwrap();
//! assert_eq!(filter.expected_elements(), 1000);
//!
//! // Explicit sizing
//! let filter = FilterBuilder::new()
//!     .expected_elements(50_000)
//!     .false_positive_rate(0.001)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.expected_elements(), 50_000);
//! ```

use crate::error::Result;
use crate::filter::BloomFilter;
use crate::hash::strategies::{DoubleHashing, IndexStrategy};
use crate::hash::{BloomHasher, Fnv1aHasher};

/// Default expected element count.
pub const DEFAULT_EXPECTED_ELEMENTS: usize = 1000;

/// Default target false positive rate.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.01;

/// Builder for [`BloomFilter`] instances.
///
/// Validation happens in [`build`](Self::build), not in the setters, so an
/// invalid rate set mid-chain surfaces as an `InvalidParameter` error at
/// the end rather than a panic in the middle.
#[derive(Debug, Clone)]
pub struct FilterBuilder<H = Fnv1aHasher, S = DoubleHashing> {
    expected_elements: usize,
    false_positive_rate: f64,
    hasher: H,
    strategy: S,
}

impl FilterBuilder<Fnv1aHasher, DoubleHashing> {
    /// Create a builder with the default sizing and default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_elements: DEFAULT_EXPECTED_ELEMENTS,
            false_positive_rate: DEFAULT_FALSE_POSITIVE_RATE,
            hasher: Fnv1aHasher::new(),
            strategy: DoubleHashing,
        }
    }
}

impl Default for FilterBuilder<Fnv1aHasher, DoubleHashing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, S> FilterBuilder<H, S>
where
    H: BloomHasher,
    S: IndexStrategy,
{
    /// Set the expected number of elements.
    #[must_use]
    pub fn expected_elements(mut self, n: usize) -> Self {
        self.expected_elements = n;
        self
    }

    /// Set the target false positive rate.
    #[must_use]
    pub fn false_positive_rate(mut self, p: f64) -> Self {
        self.false_positive_rate = p;
        self
    }

    /// Swap in a different hash function.
    #[must_use]
    pub fn hasher<H2: BloomHasher>(self, hasher: H2) -> FilterBuilder<H2, S> {
        FilterBuilder {
            expected_elements: self.expected_elements,
            false_positive_rate: self.false_positive_rate,
            hasher,
            strategy: self.strategy,
        }
    }

    /// Swap in a different position-derivation strategy.
    #[must_use]
    pub fn strategy<S2: IndexStrategy>(self, strategy: S2) -> FilterBuilder<H, S2> {
        FilterBuilder {
            expected_elements: self.expected_elements,
            false_positive_rate: self.false_positive_rate,
            hasher: self.hasher,
            strategy,
        }
    }

    /// Validate the configuration and construct the filter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterError::InvalidParameter`] if the element
    /// count is zero or the rate is outside (0, 1).
    pub fn build(self) -> Result<BloomFilter<H, S>> {
        BloomFilter::with_strategy(
            self.expected_elements,
            self.false_positive_rate,
            self.hasher,
            self.strategy,
        )
    }
}
