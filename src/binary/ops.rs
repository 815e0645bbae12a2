//! Bitwise operations trait.
//!
//! Defines the element-wise operations the adder is built from, shared by
//! single bits and bit arrays.

use crate::binary::{Bit, BitArray};

/// Trait for types that support bitwise operations.
///
/// Binary operations on arrays pair bits by index and assume both operands
/// have the same width; callers check lengths first.
pub trait BitOps {
    /// The output type for operations that return a value of the same size.
    type Output;

    /// Bitwise exclusive or.
    fn bit_xor(&self, other: &Self) -> Self::Output;

    /// Bitwise and.
    fn bit_and(&self, other: &Self) -> Self::Output;

    /// Half adder applied position by position: returns (sum, carry).
    ///
    /// The carries are left in the position that generated them.
    fn half_add(&self, other: &Self) -> (Self::Output, Self::Output) {
        (self.bit_xor(other), self.bit_and(other))
    }
}

impl BitOps for Bit {
    type Output = Bit;

    #[inline]
    fn bit_xor(&self, other: &Self) -> Bit {
        self.xor(*other)
    }

    #[inline]
    fn bit_and(&self, other: &Self) -> Bit {
        self.and(*other)
    }
}

impl BitOps for BitArray {
    type Output = BitArray;

    fn bit_xor(&self, other: &Self) -> BitArray {
        self.iter().zip(other.iter()).map(|(a, b)| a.bit_xor(&b)).collect()
    }

    fn bit_and(&self, other: &Self) -> BitArray {
        self.iter().zip(other.iter()).map(|(a, b)| a.bit_and(&b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_adder_table() {
        assert_eq!(Bit::Zero.half_add(&Bit::Zero), (Bit::Zero, Bit::Zero));
        assert_eq!(Bit::Zero.half_add(&Bit::One), (Bit::One, Bit::Zero));
        assert_eq!(Bit::One.half_add(&Bit::Zero), (Bit::One, Bit::Zero));
        assert_eq!(Bit::One.half_add(&Bit::One), (Bit::Zero, Bit::One));
    }

    #[test]
    fn test_array_xor() {
        let a = BitArray::from([0, 1, 1, 1]);
        let b = BitArray::from([0, 1, 0, 1]);
        assert_eq!(a.bit_xor(&b), BitArray::from([0, 0, 1, 0]));
    }

    #[test]
    fn test_array_and() {
        let a = BitArray::from([0, 1, 1, 1]);
        let b = BitArray::from([0, 1, 0, 1]);
        assert_eq!(a.bit_and(&b), BitArray::from([0, 1, 0, 1]));
    }

    #[test]
    fn test_array_half_add_matches_single_bits() {
        let a = BitArray::from([1, 1, 0, 0]);
        let b = BitArray::from([1, 0, 1, 0]);
        let (sum, carry) = a.half_add(&b);

        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            let (s, c) = x.half_add(&y);
            assert_eq!(sum.iter().nth(i), Some(s));
            assert_eq!(carry.iter().nth(i), Some(c));
        }
    }
}
