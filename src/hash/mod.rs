//! Hash functions and position-derivation strategies.
//!
//! ```text
//! hash/
//! ├── hasher.rs      - BloomHasher trait and Fnv1aHasher default
//! ├── strategies.rs  - IndexStrategy trait, DoubleHashing, SeededHashing
//! ├── xxhash.rs      - xxHash3 backend (feature = "xxhash")
//! └── mod.rs         - this file (public API)
//! ```
//!
//! Hashers map bytes to 64-bit values; strategies map those values to k
//! positions inside the bit array. The filter composes one of each with
//! the canonical item encoding from the `key` module.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::hash::{DoubleHashing, Fnv1aHasher, IndexStrategy};
//!
//! let positions = DoubleHashing.indices(&Fnv1aHasher::new(), b"hello", 7, 9586);
//! assert_eq!(positions.len(), 7);
//! ```

pub mod hasher;
pub mod strategies;

#[cfg(feature = "xxhash")]
pub mod xxhash;

pub use hasher::{BloomHasher, Fnv1aHasher};
pub use strategies::{DoubleHashing, IndexStrategy, SeededHashing};

#[cfg(feature = "xxhash")]
pub use xxhash::XxHasher;

/// Type alias for the default hasher used by filters.
pub type DefaultHasher = Fnv1aHasher;
