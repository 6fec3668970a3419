//! Optimal parameter derivation for the filter.
//!
//! Given an expected element count `n` and a target false positive rate
//! `p`, the classic formulas yield the bit array size and the number of
//! hash functions:
//!
//! - `m = ceil(-n × ln(p) / (ln 2)²)` (bits in the filter, at least 1)
//! - `k = round((m / n) × ln 2)` (hash functions, at least 1)
//!
//! The theoretical false positive rate after `n` insertions is
//! `(1 - e^(-kn/m))^k`. Separately, [`saturation_fp_rate`] estimates the
//! rate from the observed fraction of set bits, which reflects the actual
//! load rather than the construction-time assumptions.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Kirsch & Mitzenmacher (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{FilterError, Result};
use std::f64::consts::LN_2;

/// Mathematical constant: (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Calculate the optimal number of bits for given constraints.
///
/// Implements `m = ceil(-n × ln(p) / (ln 2)²)`, floored at 1 bit. Rounding
/// up guarantees the target false positive rate is met or exceeded.
///
/// # Arguments
///
/// * `n` - Expected number of elements to insert (must be > 0)
/// * `fp_rate` - Target false positive rate (must be in the open interval (0, 1))
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] if `n == 0`, if `fp_rate` is
/// outside (0, 1), or if the derived size exceeds addressable memory.
///
/// # Examples
///
/// ```
/// use bloomsieve::core::params::optimal_bit_count;
///
/// // For 1000 items with a 1% false positive rate
/// let bits = optimal_bit_count(1000, 0.01).unwrap();
/// assert_eq!(bits, 9586); // ≈1.2 KB
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    if n == 0 {
        return Err(FilterError::invalid_parameter(
            "expected elements must be greater than 0",
        ));
    }

    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(FilterError::invalid_parameter(format!(
            "false positive rate {} is out of bounds, must be in (0, 1)",
            fp_rate
        )));
    }

    let m = -(n as f64) * fp_rate.ln() / LN2_SQUARED;

    // Guard the cast before ceil: a huge n with a tiny fp_rate can push the
    // result past what a usize can address.
    if m > (usize::MAX / 2) as f64 {
        return Err(FilterError::invalid_parameter(format!(
            "derived filter size {:.0} bits exceeds addressable memory",
            m
        )));
    }

    Ok((m.ceil() as usize).max(1))
}

/// Calculate the optimal number of hash functions.
///
/// Implements `k = round((m / n) × ln 2)`, floored at 1. This minimizes the
/// false positive rate for a filter of `m` bits holding `n` elements.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] if `m == 0` or `n == 0`.
///
/// # Examples
///
/// ```
/// use bloomsieve::core::params::optimal_hash_count;
///
/// let k = optimal_hash_count(9586, 1000).unwrap();
/// assert_eq!(k, 7);
/// ```
pub fn optimal_hash_count(m: usize, n: usize) -> Result<usize> {
    if m == 0 {
        return Err(FilterError::invalid_parameter(
            "filter size must be greater than 0 bits",
        ));
    }

    if n == 0 {
        return Err(FilterError::invalid_parameter(
            "expected elements must be greater than 0",
        ));
    }

    let k = (m as f64 / n as f64) * LN_2;

    Ok((k.round() as usize).max(1))
}

/// Derive both filter parameters at once.
///
/// Convenience combiner over [`optimal_bit_count`] and
/// [`optimal_hash_count`].
///
/// # Errors
///
/// Returns error if the inputs are invalid (see [`optimal_bit_count`]).
///
/// # Examples
///
/// ```
/// use bloomsieve::core::params::calculate_filter_params;
///
/// let (m, k) = calculate_filter_params(1000, 0.01).unwrap();
/// assert_eq!((m, k), (9586, 7));
/// ```
pub fn calculate_filter_params(n: usize, fp_rate: f64) -> Result<(usize, usize)> {
    let m = optimal_bit_count(n, fp_rate)?;
    let k = optimal_hash_count(m, n)?;
    Ok((m, k))
}

/// Theoretical false positive rate for the given parameters.
///
/// Implements `(1 - e^(-kn/m))^k`, the probability that a never-inserted
/// item maps onto `k` already-set bits after `n` insertions. Assumes
/// uniformly distributed, independent hash positions; `m` and `k` are
/// expected to come from the derivation above.
///
/// Returns a probability in `[0, 1]`; an empty filter (`n == 0`) yields 0.
#[must_use]
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }

    let exponent = -(k as f64 * n as f64) / m as f64;
    let prob_bit_one = 1.0 - exponent.exp();

    prob_bit_one.powf(k as f64).clamp(0.0, 1.0)
}

/// False positive rate estimated from observed saturation.
///
/// Implements `(bits_set / m)^k`: the chance that all `k` probed positions
/// land on set bits, given the fraction currently set. Unlike
/// [`expected_fp_rate`] this reflects the filter's actual load, so it is
/// the estimator reported by statistics.
///
/// # Examples
///
/// ```
/// use bloomsieve::core::params::saturation_fp_rate;
///
/// assert_eq!(saturation_fp_rate(0, 1000, 7), 0.0);
/// assert!((saturation_fp_rate(500, 1000, 7) - 0.5f64.powi(7)).abs() < 1e-12);
/// ```
#[must_use]
pub fn saturation_fp_rate(bits_set: usize, m: usize, k: usize) -> f64 {
    let load = bits_set as f64 / m as f64;
    load.powf(k as f64).clamp(0.0, 1.0)
}

/// Bits required per element for a target false positive rate.
///
/// Formula: `-ln(p) / (ln 2)²`. A 1% rate needs ~9.6 bits per element, a
/// 0.1% rate ~14.4.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] if `fp_rate` is not in (0, 1).
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(FilterError::invalid_parameter(format!(
            "false positive rate {} is out of bounds, must be in (0, 1)",
            fp_rate
        )));
    }

    Ok(-fp_rate.ln() / LN2_SQUARED)
}
