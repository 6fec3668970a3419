//! Core building blocks: parameter math and bit storage.
//!
//! ```text
//! core/
//! ├── params.rs    - parameter derivation formulas
//! ├── bitvec.rs    - fixed-size bit vector
//! └── mod.rs       - this file (public API)
//! ```

pub mod bitvec;
pub mod params;

pub use bitvec::BitVec;
pub use params::{
    bits_per_element, calculate_filter_params, expected_fp_rate, optimal_bit_count,
    optimal_hash_count, saturation_fp_rate,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_and_bitvec_compose() {
        let (m, k) = calculate_filter_params(1000, 0.01).unwrap();

        let bv = BitVec::new(m).unwrap();
        assert_eq!(bv.len(), m);
        assert!(k >= 5 && k <= 10);
    }

    #[test]
    fn test_reexports() {
        let m = optimal_bit_count(1000, 0.01).unwrap();
        let k = optimal_hash_count(m, 1000).unwrap();
        assert_eq!((m, k), (9586, 7));
    }
}
