//! Canonical byte encoding for filter items.
//!
//! The filter hashes bytes, never values: every supported item type defines
//! exactly one deterministic byte form here. Each encoding starts with a
//! type tag so structurally different values never collide (the integer `1`
//! and the string `"1"` produce different bytes), and variable-length
//! payloads are length-prefixed so nested sequences frame unambiguously.
//!
//! Encodings per type:
//!
//! - strings: UTF-8 bytes, length-prefixed
//! - unsigned integers: widened to `u64` little-endian (`u128` keeps its
//!   own width); signed integers likewise via `i64`/`i128`
//! - `bool`, `char`: fixed-width payloads
//! - floats: widened to `f64` and encoded from the bit pattern, with
//!   `-0.0` normalized to `0.0`; NaN is rejected because it has no single
//!   canonical bit pattern
//! - slices, arrays and `Vec`s of encodable items: count-prefixed element
//!   encodings; tuples of two and three; `Option`
//!
//! Widening means the same mathematical value encodes identically across
//! widths: `5u8`, `5u32` and `5u64` are one key, as are `1.5f32` and
//! `1.5f64`.
//!
//! # Examples
//!
//! ```
//! use bloomsieve::key::FilterKey;
//!
//! let mut a = Vec::new();
//! let mut b = Vec::new();
//! 5u8.encode(&mut a).unwrap();
//! 5u64.encode(&mut b).unwrap();
//! assert_eq!(a, b);
//! ```

use crate::error::{FilterError, Result};

// Type tags. One per structural shape; never reused.
const TAG_UNSIGNED: u8 = 0x01;
const TAG_UNSIGNED_WIDE: u8 = 0x02;
const TAG_SIGNED: u8 = 0x03;
const TAG_SIGNED_WIDE: u8 = 0x04;
const TAG_BOOL: u8 = 0x05;
const TAG_CHAR: u8 = 0x06;
const TAG_FLOAT: u8 = 0x07;
const TAG_STR: u8 = 0x08;
const TAG_SEQ: u8 = 0x09;
const TAG_TUPLE: u8 = 0x0a;
const TAG_OPTION: u8 = 0x0b;

/// An item the filter can hash.
///
/// `encode` appends the item's canonical bytes to `buf`. The encoding must
/// be deterministic: the same value always yields the same bytes, within a
/// process and across runs. On error the buffer contents are unspecified;
/// the filter discards the buffer without touching any of its own state.
pub trait FilterKey {
    /// Append this item's canonical byte encoding to `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::NonHashableInput`] if the value has no
    /// canonical form (for built-in types, only floating point NaN).
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()>;
}

fn encode_f64(value: f64, buf: &mut Vec<u8>) -> Result<()> {
    if value.is_nan() {
        return Err(FilterError::non_hashable(
            "NaN has no canonical encoding",
        ));
    }

    // -0.0 == 0.0 but has a different bit pattern; pick one form.
    let canonical = if value == 0.0 { 0.0 } else { value };

    buf.push(TAG_FLOAT);
    buf.extend_from_slice(&canonical.to_bits().to_le_bytes());
    Ok(())
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl FilterKey for $ty {
                #[inline]
                fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
                    buf.push(TAG_UNSIGNED);
                    buf.extend_from_slice(&u64::from(*self).to_le_bytes());
                    Ok(())
                }
            }
        )*
    };
}

macro_rules! impl_key_for_signed {
    ($($ty:ty),*) => {
        $(
            impl FilterKey for $ty {
                #[inline]
                fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
                    buf.push(TAG_SIGNED);
                    buf.extend_from_slice(&i64::from(*self).to_le_bytes());
                    Ok(())
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64);
impl_key_for_signed!(i8, i16, i32, i64);

impl FilterKey for usize {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_UNSIGNED);
        buf.extend_from_slice(&(*self as u64).to_le_bytes());
        Ok(())
    }
}

impl FilterKey for isize {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_SIGNED);
        buf.extend_from_slice(&(*self as i64).to_le_bytes());
        Ok(())
    }
}

impl FilterKey for u128 {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_UNSIGNED_WIDE);
        buf.extend_from_slice(&self.to_le_bytes());
        Ok(())
    }
}

impl FilterKey for i128 {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_SIGNED_WIDE);
        buf.extend_from_slice(&self.to_le_bytes());
        Ok(())
    }
}

impl FilterKey for bool {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_BOOL);
        buf.push(u8::from(*self));
        Ok(())
    }
}

impl FilterKey for char {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_CHAR);
        buf.extend_from_slice(&u32::from(*self).to_le_bytes());
        Ok(())
    }
}

impl FilterKey for f32 {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        encode_f64(f64::from(*self), buf)
    }
}

impl FilterKey for f64 {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        encode_f64(*self, buf)
    }
}

impl FilterKey for str {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_STR);
        buf.extend_from_slice(&(self.len() as u64).to_le_bytes());
        buf.extend_from_slice(self.as_bytes());
        Ok(())
    }
}

impl FilterKey for String {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        self.as_str().encode(buf)
    }
}

impl<K: FilterKey> FilterKey for [K] {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_SEQ);
        buf.extend_from_slice(&(self.len() as u64).to_le_bytes());
        for element in self {
            element.encode(buf)?;
        }
        Ok(())
    }
}

impl<K: FilterKey, const N: usize> FilterKey for [K; N] {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        self.as_slice().encode(buf)
    }
}

impl<K: FilterKey> FilterKey for Vec<K> {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        self.as_slice().encode(buf)
    }
}

impl<A: FilterKey, B: FilterKey> FilterKey for (A, B) {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_TUPLE);
        buf.push(2);
        self.0.encode(buf)?;
        self.1.encode(buf)
    }
}

impl<A: FilterKey, B: FilterKey, C: FilterKey> FilterKey for (A, B, C) {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_TUPLE);
        buf.push(3);
        self.0.encode(buf)?;
        self.1.encode(buf)?;
        self.2.encode(buf)
    }
}

impl<K: FilterKey> FilterKey for Option<K> {
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        buf.push(TAG_OPTION);
        match self {
            None => {
                buf.push(0);
                Ok(())
            }
            Some(value) => {
                buf.push(1);
                value.encode(buf)
            }
        }
    }
}

impl<K: FilterKey + ?Sized> FilterKey for &K {
    #[inline]
    fn encode(&self, buf: &mut Vec<u8>) -> Result<()> {
        (**self).encode(buf)
    }
}
