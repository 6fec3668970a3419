//! xxHash3 backend, behind the `xxhash` feature.
//!
//! Considerably faster than FNV-1a on longer inputs while keeping the same
//! determinism guarantees. Swapping hashers changes which bits an item maps
//! to, so a filter must use one hasher for its whole lifetime.

use crate::hash::hasher::BloomHasher;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// xxHash3-based hasher.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::{BloomHasher, XxHasher};
///
/// let hasher = XxHasher::new();
/// assert_eq!(hasher.hash_bytes(b"fast"), hasher.hash_bytes(b"fast"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct XxHasher {
    seed: u64,
}

impl XxHasher {
    /// Create a hasher with the default seed.
    #[must_use]
    pub fn new() -> Self {
        Self { seed: 0 }
    }

    /// Create a hasher with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for XxHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl BloomHasher for XxHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        xxh3_64_with_seed(bytes, self.seed)
    }

    #[inline]
    fn hash_bytes_with_seed(&self, bytes: &[u8], seed: u64) -> u64 {
        xxh3_64_with_seed(bytes, self.seed ^ seed)
    }

    #[inline]
    fn name(&self) -> &'static str {
        "XxHash3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let hasher = XxHasher::new();
        assert_eq!(hasher.hash_bytes(b"test"), hasher.hash_bytes(b"test"));
    }

    #[test]
    fn test_seeds_differ() {
        let data = b"test";
        assert_ne!(
            XxHasher::with_seed(1).hash_bytes(data),
            XxHasher::with_seed(2).hash_bytes(data)
        );
    }

    #[test]
    fn test_pair_distinct() {
        let (h1, h2) = XxHasher::new().hash_bytes_pair(b"data");
        assert_ne!(h1, h2);
    }
}
