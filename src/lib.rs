//! Bloomsieve: a space-efficient probabilistic set membership filter.
//!
//! A Bloom filter answers "might this element have been inserted?" using a
//! fixed bit array and k hash functions, in sublinear space relative to
//! storing the elements. It can produce:
//!
//! - **False positives**: may report an element as present when it is not,
//!   at a rate tuned via the construction parameters
//! - **Zero false negatives**: an absent verdict is definitive
//!
//! # Quick Start
//!
//! ```
//! use bloomsieve::BloomFilter;
//!
//! # fn main() -> bloomsieve::Result<()> {
//! // Sized for 1000 elements at a 1% false positive rate
//! let mut filter = BloomFilter::new(1000, 0.01)?;
//!
//! filter.insert("apple")?;
//! filter.insert("banana")?;
//!
//! assert!(filter.contains("apple")?);    // definitely inserted, or a rare false positive
//! assert!(!filter.contains("durian")?);  // definitely never inserted
//!
//! let stats = filter.stats();
//! println!(
//!     "{} bits, {} hashes, load {:.4}",
//!     stats.size, stats.hash_count, stats.load_factor
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Items
//!
//! Anything implementing [`FilterKey`] can be inserted: strings, integers,
//! floats, bools, chars, and compositions of those (slices, `Vec`s, tuples,
//! `Option`). Keys encode to tagged canonical bytes, so one filter may hold
//! mixed types without structural collisions. Floating point NaN is the one
//! unencodable value and is rejected with
//! [`FilterError::NonHashableInput`].
//!
//! # Concurrency
//!
//! `insert` and `clear` take `&mut self`; `contains` and `stats` take
//! `&self`. Any number of readers may run concurrently, mutation requires
//! exclusivity, and the borrow checker enforces the split. Wrap the filter
//! in `std::sync::RwLock` to share it across threads.
//!
//! # Feature Flags
//!
//! | Feature   | Enables                                  |
//! |-----------|------------------------------------------|
//! | (default) | [`Fnv1aHasher`] (seeded FNV-1a)          |
//! | `xxhash`  | [`hash::XxHasher`] (xxHash3)             |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

/// Core data structures and parameter math
pub mod core;

/// Error types and result alias
pub mod error;

/// The filter and its statistics snapshot
pub mod filter;

/// Hash functions and position-derivation strategies
pub mod hash;

/// Canonical byte encoding for filter items
pub mod key;

/// Fluent construction with default sizing
pub mod builder;

pub use builder::FilterBuilder;
pub use error::{FilterError, Result};
pub use filter::{BloomFilter, FilterStats};
pub use hash::{BloomHasher, DoubleHashing, Fnv1aHasher, IndexStrategy, SeededHashing};
pub use key::FilterKey;

#[cfg(feature = "xxhash")]
pub use hash::XxHasher;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomsieve::prelude::*;
///
/// let mut filter = BloomFilter::new(1000, 0.01).unwrap();
/// filter.insert("hello").unwrap();
/// assert!(filter.contains("hello").unwrap());
/// ```
pub mod prelude {
    pub use crate::builder::FilterBuilder;
    pub use crate::error::{FilterError, Result};
    pub use crate::filter::{BloomFilter, FilterStats};
    pub use crate::hash::{BloomHasher, DoubleHashing, Fnv1aHasher, IndexStrategy, SeededHashing};
    pub use crate::key::FilterKey;

    #[cfg(feature = "xxhash")]
    pub use crate::hash::XxHasher;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.insert("test").unwrap();
        assert!(filter.contains("test").unwrap());
    }

    #[test]
    fn test_builder_from_root() {
        let filter = FilterBuilder::new().build().unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut filter = BloomFilter::new(1000, 0.01).unwrap();

        filter.insert("apple").unwrap();
        filter.insert("banana").unwrap();
        filter.insert("cherry").unwrap();

        assert!(filter.contains("apple").unwrap());
        assert!(filter.contains("banana").unwrap());
        assert!(filter.contains("cherry").unwrap());

        let stats = filter.stats();
        assert_eq!(stats.element_count, 3);
        assert!(stats.bits_set > 0);
    }
}
