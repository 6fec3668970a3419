//! The Bloom filter: a fixed bit array probed through k hash positions.
//!
//! # Algorithm
//!
//! A filter sized for `n` expected elements at false positive rate `p`
//! derives `m` bits and `k` hash functions once at construction. Inserting
//! an item sets the k bits its canonical encoding hashes to; querying
//! checks the same k bits and answers `true` only if all are set.
//!
//! # Properties
//!
//! - **No false negatives**: an inserted item is always found
//! - **Bounded false positives**: the rate is tunable via `(n, p)` and
//!   converges to `p` when the filter holds about `n` elements
//! - **Space**: ~9.6 bits per element at a 1% rate
//! - **Time**: O(k) insert and query, O(1) statistics
//!
//! # Concurrency
//!
//! Mutation (`insert`, `clear`) takes `&mut self`; reads (`contains`,
//! `stats`) take `&self`. The borrow checker therefore enforces the
//! readers-writer discipline directly: share a filter across threads by
//! wrapping it in `RwLock` or `Mutex`.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::BloomFilter;
//!
//! # fn main() -> bloomsieve::Result<()> {
//! let mut filter = BloomFilter::new(1000, 0.01)?;
//!
//! filter.insert("apple")?;
//! filter.insert("banana")?;
//!
//! assert!(filter.contains("apple")?);
//! assert!(!filter.contains("durian")?);
//!
//! let stats = filter.stats();
//! assert_eq!(stats.element_count, 2);
//! # Ok(())
//! # }
//! ```

use crate::core::bitvec::BitVec;
use crate::core::params::{calculate_filter_params, saturation_fp_rate};
use crate::error::Result;
use crate::hash::strategies::{DoubleHashing, IndexStrategy};
use crate::hash::{BloomHasher, Fnv1aHasher};
use crate::key::FilterKey;

/// Point-in-time snapshot of a filter's state.
///
/// Returned by [`BloomFilter::stats`]; a plain value with no ties back to
/// the filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterStats {
    /// Bit array size `m`.
    pub size: usize,

    /// Number of hash functions `k`.
    pub hash_count: usize,

    /// Number of `insert` calls, duplicates included. Not a cardinality.
    pub element_count: u64,

    /// Number of bits currently set to 1.
    pub bits_set: usize,

    /// Fraction of bits set: `bits_set / size`.
    pub load_factor: f64,

    /// False positive rate estimated from observed saturation,
    /// `(bits_set / size)^hash_count`.
    ///
    /// This reflects the filter's actual load rather than the theoretical
    /// rate implied by the construction parameters.
    pub estimated_false_positive_rate: f64,
}

/// A Bloom filter with parameters derived from `(n, p)` at construction.
///
/// Generic over the hash function `H` and the position-derivation strategy
/// `S`; the defaults (seeded FNV-1a with double hashing) suit most uses.
/// Items are anything implementing [`FilterKey`], and one filter may hold
/// items of mixed types since keys carry their own type tags.
///
/// # Guarantees
///
/// - `contains` never returns `false` for an inserted item
/// - two filters built with the same parameters and fed the same sequence
///   hold identical bits and report identical statistics
/// - `size` and `hash_count` never change after construction; bits only
///   transition 0 to 1 except through [`clear`](Self::clear)
#[derive(Debug, Clone)]
pub struct BloomFilter<H = Fnv1aHasher, S = DoubleHashing>
where
    H: BloomHasher,
    S: IndexStrategy,
{
    /// Underlying bit array of length `m`.
    bits: BitVec,

    /// Number of hash functions.
    k: usize,

    /// Hash function.
    hasher: H,

    /// Position-derivation strategy.
    strategy: S,

    /// Count of insert calls since construction or the last clear.
    inserted: u64,

    /// Exact count of set bits, maintained incrementally.
    bits_set: usize,

    /// Construction parameter, kept for reporting.
    expected_elements: usize,

    /// Construction parameter, kept for reporting.
    target_fpr: f64,
}

impl BloomFilter<Fnv1aHasher, DoubleHashing> {
    /// Create a filter with optimal parameters and the default hasher.
    ///
    /// Derives `m = ceil(-n × ln(p) / (ln 2)²)` and
    /// `k = round((m / n) × ln 2)` once; both are fixed for the filter's
    /// lifetime.
    ///
    /// # Arguments
    ///
    /// * `expected_elements` - Expected number of insertions (n), must be > 0
    /// * `false_positive_rate` - Target rate (p), must be in (0, 1)
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterError::InvalidParameter`] for invalid inputs;
    /// no filter is created.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::BloomFilter;
    ///
    /// let filter = BloomFilter::new(1000, 0.01).unwrap();
    /// assert_eq!(filter.size(), 9586);
    /// assert_eq!(filter.hash_count(), 7);
    ///
    /// assert!(BloomFilter::new(0, 0.01).is_err());
    /// assert!(BloomFilter::new(1000, 1.5).is_err());
    /// ```
    pub fn new(expected_elements: usize, false_positive_rate: f64) -> Result<Self> {
        Self::with_strategy(
            expected_elements,
            false_positive_rate,
            Fnv1aHasher::new(),
            DoubleHashing,
        )
    }
}

impl<H> BloomFilter<H, DoubleHashing>
where
    H: BloomHasher,
{
    /// Create a filter with a custom hash function.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BloomFilter::new`].
    pub fn with_hasher(
        expected_elements: usize,
        false_positive_rate: f64,
        hasher: H,
    ) -> Result<Self> {
        Self::with_strategy(expected_elements, false_positive_rate, hasher, DoubleHashing)
    }
}

impl<H, S> BloomFilter<H, S>
where
    H: BloomHasher,
    S: IndexStrategy,
{
    /// Create a filter with a custom hasher and position strategy.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BloomFilter::new`].
    pub fn with_strategy(
        expected_elements: usize,
        false_positive_rate: f64,
        hasher: H,
        strategy: S,
    ) -> Result<Self> {
        let (m, k) = calculate_filter_params(expected_elements, false_positive_rate)?;

        Ok(Self {
            bits: BitVec::new(m)?,
            k,
            hasher,
            strategy,
            inserted: 0,
            bits_set: 0,
            expected_elements,
            target_fpr: false_positive_rate,
        })
    }

    /// Insert an item.
    ///
    /// Sets the k bits the item hashes to and increments the element count
    /// by exactly one, duplicates included. Re-inserting an item is
    /// harmless beyond the counter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterError::NonHashableInput`] if the item has no
    /// canonical encoding; the filter is left unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::BloomFilter;
    ///
    /// # fn main() -> bloomsieve::Result<()> {
    /// let mut filter = BloomFilter::new(100, 0.01)?;
    /// filter.insert("hello")?;
    /// filter.insert(&42u64)?;
    /// assert_eq!(filter.element_count(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert<K: FilterKey + ?Sized>(&mut self, item: &K) -> Result<()> {
        let mut key = Vec::with_capacity(32);
        item.encode(&mut key)?;

        for index in self
            .strategy
            .indices(&self.hasher, &key, self.k, self.bits.len())
        {
            if self.bits.set(index) {
                self.bits_set += 1;
            }
        }

        self.inserted += 1;
        Ok(())
    }

    /// Test whether an item might have been inserted.
    ///
    /// Returns `false` if any probed bit is unset, in which case the item
    /// was definitely never inserted. Returns `true` if all k bits are
    /// set; this is probably a prior insert, with a false positive chance
    /// bounded by the construction rate at design load.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterError::NonHashableInput`] if the item has no
    /// canonical encoding.
    pub fn contains<K: FilterKey + ?Sized>(&self, item: &K) -> Result<bool> {
        let mut key = Vec::with_capacity(32);
        item.encode(&mut key)?;

        Ok(self
            .strategy
            .indices(&self.hasher, &key, self.k, self.bits.len())
            .into_iter()
            .all(|index| self.bits.get(index)))
    }

    /// Snapshot the filter's statistics.
    ///
    /// Pure read, O(1): the set-bit count is maintained incrementally on
    /// insert rather than recounted by scanning.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomsieve::BloomFilter;
    ///
    /// # fn main() -> bloomsieve::Result<()> {
    /// let mut filter = BloomFilter::new(1000, 0.01)?;
    /// filter.insert("apple")?;
    ///
    /// let stats = filter.stats();
    /// assert_eq!(stats.size, 9586);
    /// assert_eq!(stats.hash_count, 7);
    /// assert_eq!(stats.element_count, 1);
    /// assert!(stats.bits_set > 0 && stats.bits_set <= 7);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            size: self.size(),
            hash_count: self.k,
            element_count: self.inserted,
            bits_set: self.bits_set,
            load_factor: self.load_factor(),
            estimated_false_positive_rate: self.estimated_fp_rate(),
        }
    }

    /// Reset the filter to its freshly constructed state.
    ///
    /// Zeroes every bit and both counters. `size` and `hash_count` are
    /// untouched; they depend only on the construction parameters and are
    /// not re-derived.
    pub fn clear(&mut self) {
        self.bits.clear();
        self.inserted = 0;
        self.bits_set = 0;
    }

    /// Bit array size `m`.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash functions `k`.
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Number of insert calls, duplicates included.
    #[must_use]
    #[inline]
    pub fn element_count(&self) -> u64 {
        self.inserted
    }

    /// Number of bits currently set.
    #[must_use]
    #[inline]
    pub fn bits_set(&self) -> usize {
        self.bits_set
    }

    /// Fraction of bits currently set.
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        self.bits_set as f64 / self.size() as f64
    }

    /// False positive rate estimated from observed saturation.
    #[must_use]
    pub fn estimated_fp_rate(&self) -> f64 {
        saturation_fp_rate(self.bits_set, self.size(), self.k)
    }

    /// Whether no bits are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits_set == 0
    }

    /// The expected element count the filter was sized for.
    #[must_use]
    #[inline]
    pub fn expected_elements(&self) -> usize {
        self.expected_elements
    }

    /// The target false positive rate the filter was sized for.
    #[must_use]
    #[inline]
    pub fn target_fpr(&self) -> f64 {
        self.target_fpr
    }

    /// Name of the hash function in use.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// Approximate memory footprint in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.bits.memory_usage() + std::mem::size_of::<Self>()
    }
}
