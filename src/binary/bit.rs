//! Single binary digit.
//!
//! A bit holds one of two values, 0 or 1. Anything integer-like can be
//! turned into a bit by truthiness: zero is `Zero`, everything else is `One`.

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single binary digit.
///
/// Serialized as the plain integer `0` or `1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
#[repr(u8)]
pub enum Bit {
    /// Zero (0)
    #[default]
    Zero = 0,
    /// One (1)
    One = 1,
}

impl Bit {
    /// Both bit values in order: Zero, One
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];

    /// Create a bit from a bool.
    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value { Bit::One } else { Bit::Zero }
    }

    /// Create a bit from any value by truthiness.
    ///
    /// The value counts as 1 when it differs from the type's default
    /// (zero for numbers, `false` for bools).
    #[inline]
    pub fn from_truthy<T: Default + PartialEq>(value: T) -> Self {
        Self::from_bool(value != T::default())
    }

    /// Parse a `'0'` or `'1'` character.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// Convert to integer value.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Convert to bool.
    #[inline]
    pub const fn to_bool(self) -> bool {
        matches!(self, Bit::One)
    }

    /// The digit character, `'0'` or `'1'`.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    /// Exclusive or; the half-adder sum.
    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        Self::from_bool(self.to_bool() != other.to_bool())
    }

    /// Logical and; the half-adder carry.
    #[inline]
    pub const fn and(self, other: Self) -> Self {
        Self::from_bool(self.to_bool() && other.to_bool())
    }

    /// Returns true if this bit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Bit::Zero)
    }

    /// Returns true if this bit is one.
    #[inline]
    pub const fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }
}

impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<u8> for Bit {
    fn from(value: u8) -> Self {
        Bit::from_truthy(value)
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.to_u8()
    }
}
