//! Strategies for deriving k bit positions from an encoded item.
//!
//! A strategy turns (hasher, canonical bytes, k, m) into k indices in
//! `[0, m)`. Two interchangeable designs are provided:
//!
//! | Strategy        | Base hashes | Cost per item | Notes                      |
//! |-----------------|-------------|---------------|----------------------------|
//! | [`DoubleHashing`] | 2         | 2 hashes      | default, proven optimal    |
//! | [`SeededHashing`] | k         | k hashes      | fully independent hashes   |
//!
//! Double hashing derives position i as `(h1 + i·h2) mod m` from two base
//! hashes; Kirsch & Mitzenmacher showed this matches k independent hash
//! functions asymptotically. Seeded hashing salts the item with each index
//! instead, trading speed for full independence.
//!
//! Both are deterministic for a fixed input, which the filter relies on.
//!
//! # References
//!
//! - Kirsch, A., & Mitzenmacher, M. (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]

use crate::hash::hasher::BloomHasher;

/// Derives k bit positions for one encoded item.
///
/// Implementations must be deterministic and must return indices strictly
/// below `m`. All implementations must be `Send + Sync`.
pub trait IndexStrategy: Send + Sync {
    /// Generate `k` positions in `[0, m)` for the given canonical bytes.
    fn indices<H: BloomHasher + ?Sized>(
        &self,
        hasher: &H,
        key: &[u8],
        k: usize,
        m: usize,
    ) -> Vec<usize>;

    /// Human-readable name for debugging.
    fn name(&self) -> &'static str;
}

/// Standard double hashing: `position_i = (h1 + i·h2) mod m`.
///
/// Computes two base hashes once, then derives every position
/// arithmetically. This is the crate default.
///
/// # Examples
///
/// ```
/// use bloomsieve::hash::{DoubleHashing, Fnv1aHasher, IndexStrategy};
///
/// let positions = DoubleHashing.indices(&Fnv1aHasher::new(), b"item", 7, 1000);
/// assert_eq!(positions.len(), 7);
/// assert!(positions.iter().all(|&p| p < 1000));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleHashing;

impl IndexStrategy for DoubleHashing {
    #[inline]
    fn indices<H: BloomHasher + ?Sized>(
        &self,
        hasher: &H,
        key: &[u8],
        k: usize,
        m: usize,
    ) -> Vec<usize> {
        let (h1, h2) = hasher.hash_bytes_pair(key);
        let m_u64 = m as u64;
        let mut indices = Vec::with_capacity(k);

        for i in 0..k {
            let hash = h1.wrapping_add((i as u64).wrapping_mul(h2));
            indices.push((hash % m_u64) as usize);
        }

        indices
    }

    #[inline]
    fn name(&self) -> &'static str {
        "DoubleHashing"
    }
}

/// Fully independent hashing: one seeded hash per position.
///
/// Position i is `hash(item, seed = i) mod m`. Costs k hash computations
/// per operation where double hashing costs two.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededHashing;

impl IndexStrategy for SeededHashing {
    #[inline]
    fn indices<H: BloomHasher + ?Sized>(
        &self,
        hasher: &H,
        key: &[u8],
        k: usize,
        m: usize,
    ) -> Vec<usize> {
        let m_u64 = m as u64;

        (0..k)
            .map(|i| (hasher.hash_bytes_with_seed(key, i as u64) % m_u64) as usize)
            .collect()
    }

    #[inline]
    fn name(&self) -> &'static str {
        "SeededHashing"
    }
}
