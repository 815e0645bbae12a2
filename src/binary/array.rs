//! Fixed-length bit arrays.
//!
//! A `BitArray` is an unsigned integer of a chosen width, stored most
//! significant bit first. Its length never changes after construction;
//! every operation in this crate returns a new array of the same width.

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::binary::Bit;

/// An ordered, fixed-length sequence of bits.
///
/// Index 0 holds the most significant bit, the last index the least
/// significant one.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitArray {
    bits: Vec<Bit>,
}

impl BitArray {
    /// Create an all-zero array of the given width.
    pub fn zero(len: usize) -> Self {
        Self { bits: vec![Bit::Zero; len] }
    }

    /// Create an array from bits (MSB first).
    pub fn from_bits(bits: Vec<Bit>) -> Self {
        Self { bits }
    }

    /// Create an array from arbitrary values, MSB first.
    ///
    /// Each element is coerced by truthiness, so `[0, 2, -1, 0]` becomes
    /// `0110`.
    pub fn from_values<T: Copy + Default + PartialEq>(values: &[T]) -> Self {
        Self {
            bits: values.iter().map(|&v| Bit::from_truthy(v)).collect(),
        }
    }

    /// Encode the low `width` bits of `value`, MSB first.
    ///
    /// Bits of `value` above `width` are dropped.
    pub fn from_u128(value: u128, width: usize) -> Self {
        let bits = (0..width)
            .rev()
            .map(|shift| {
                if shift >= 128 {
                    Bit::Zero
                } else {
                    Bit::from_bool((value >> shift) & 1 == 1)
                }
            })
            .collect();
        Self { bits }
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the zero-width array.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The least significant bit, or `Zero` for an empty array.
    #[inline]
    pub fn lsb(&self) -> Bit {
        self.bits.last().copied().unwrap_or_default()
    }

    /// Check if every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|b| b.is_zero())
    }

    /// Iterate over the bits, MSB first.
    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }

    /// Bits as plain integers, e.g. `[0, 1, 1, 1]`.
    pub fn to_u8_vec(&self) -> Vec<u8> {
        self.bits.iter().map(|b| b.to_u8()).collect()
    }

    /// Parse from a string like `"0b0101"` or `"0101"`.
    ///
    /// Surrounding whitespace and a `0b` prefix are allowed; `_`, `,` and
    /// whitespace between digits are skipped. Error positions count
    /// characters of `s` itself, prefix included.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let body = s.trim_start();
        let mut skip = s[..s.len() - body.len()].chars().count();
        if body.starts_with("0b") {
            skip += 2;
        }

        let mut bits = Vec::with_capacity(s.len());
        for (position, c) in s.chars().enumerate().skip(skip) {
            if c == '_' || c == ',' || c.is_whitespace() {
                continue;
            }
            match Bit::from_char(c) {
                Some(bit) => bits.push(bit),
                None => return Err(ParseError::InvalidChar { ch: c, position }),
            }
        }

        Ok(Self { bits })
    }
}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitArray({:?})", self.bits)
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl<const N: usize> From<[u8; N]> for BitArray {
    fn from(values: [u8; N]) -> Self {
        BitArray::from_values(&values)
    }
}

impl FromIterator<Bit> for BitArray {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        BitArray::from_bits(iter.into_iter().collect())
    }
}

impl std::str::FromStr for BitArray {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BitArray::parse(s)
    }
}

/// Errors that can occur when parsing bit strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character other than `0`, `1` or a separator was found.
    #[error("invalid bit character '{ch}' at position {position} (expected 0 or 1)")]
    InvalidChar { ch: char, position: usize },
}
