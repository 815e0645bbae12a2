//! Fixed-width arithmetic on bit arrays.
//!
//! Addition, halving and value extraction. Results always have the width of
//! their inputs; anything that overflows the width is dropped.

use thiserror::Error;
use crate::binary::{Bit, BitArray, BitOps};

/// Errors from bit array arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("operands have different length ({left} vs {right} bits)")]
    LengthMismatch { left: usize, right: usize },

    #[error("value of {width}-bit array does not fit in 128 bits")]
    TooWide { width: usize },
}

/// Add two bit arrays of equal width, modulo 2^width.
///
/// Fails with [`ArithError::LengthMismatch`] when the widths differ.
/// The carry out of the most significant bit is discarded.
pub fn bin_add(a: &BitArray, b: &BitArray) -> Result<BitArray, ArithError> {
    if a.len() != b.len() {
        return Err(ArithError::LengthMismatch { left: a.len(), right: b.len() });
    }
    Ok(ripple_add(a, b))
}

/// Ripple-carry addition of two arrays already known to have equal width.
///
/// Each pass folds the pending carries into the running sum and generates
/// the next carries one position toward the MSB. A carry can travel at most
/// `width` positions, so `width` passes always settle the sum.
pub(crate) fn ripple_add(a: &BitArray, b: &BitArray) -> BitArray {
    debug_assert_eq!(a.len(), b.len());

    let mut sum = a.clone();
    let mut carry = b.clone();
    for _ in 0..a.len() {
        let (partial, generated) = sum.half_add(&carry);
        sum = partial;
        carry = shift_toward_msb(&generated);
    }
    sum
}

/// Interpret a bit array (MSB first) as an unsigned integer.
///
/// Leading zeros may make the array arbitrarily wide. Fails with
/// [`ArithError::TooWide`] when the value itself needs more than 128 bits.
pub fn bin_value(a: &BitArray) -> Result<u128, ArithError> {
    let mut value = 0u128;
    for bit in a.iter() {
        if value.leading_zeros() == 0 {
            return Err(ArithError::TooWide { width: a.len() });
        }
        value = (value << 1) | u128::from(bit.to_u8());
    }
    Ok(value)
}

/// Floor-divide a bit array by two.
///
/// Shifts every bit one position toward the LSB: a zero enters at the MSB
/// and the old LSB is dropped.
pub fn floor_div_2(a: &BitArray) -> BitArray {
    if a.is_empty() {
        return BitArray::default();
    }
    std::iter::once(Bit::Zero)
        .chain(a.iter().take(a.len() - 1))
        .collect()
}

/// Multiply a bit array by two, modulo 2^width.
///
/// Shifts every bit one position toward the MSB: the old MSB is dropped and
/// a zero enters at the LSB.
pub fn shift_toward_msb(a: &BitArray) -> BitArray {
    if a.is_empty() {
        return BitArray::default();
    }
    a.iter().skip(1).chain(std::iter::once(Bit::Zero)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_seven_and_five() {
        let a = BitArray::from([0, 1, 1, 1]);
        let b = BitArray::from([0, 1, 0, 1]);
        let sum = bin_add(&a, &b).unwrap();

        assert_eq!(sum, BitArray::from([1, 1, 0, 0]));
        assert_eq!(bin_value(&sum).unwrap(), 12);
    }

    #[test]
    fn test_add_wraps_around() {
        // 15 + 3 = 18 = 2 (mod 16)
        let a = BitArray::from([1, 1, 1, 1]);
        let b = BitArray::from([0, 0, 1, 1]);
        let sum = bin_add(&a, &b).unwrap();

        assert_eq!(sum.len(), 4);
        assert_eq!(bin_value(&sum).unwrap(), 2);
    }

    #[test]
    fn test_add_full_carry_chain() {
        // 0111_1111 + 1 has to carry across seven positions
        let a = BitArray::from([0, 1, 1, 1, 1, 1, 1, 1]);
        let b = BitArray::from([0, 0, 0, 0, 0, 0, 0, 1]);
        let sum = bin_add(&a, &b).unwrap();

        assert_eq!(sum, BitArray::from([1, 0, 0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_add_length_mismatch() {
        let a = BitArray::from([0, 1]);
        let b = BitArray::from([0, 0, 1]);
        let err = bin_add(&a, &b).unwrap_err();

        assert_eq!(err, ArithError::LengthMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_add_truthy_operands() {
        let a = BitArray::from_values(&[0i64, 3, 0, -2]);
        let b = BitArray::from_values(&[0i64, 0, 0, 9]);
        let sum = bin_add(&a, &b).unwrap();

        // 0101 + 0001
        assert_eq!(sum, BitArray::from([0, 1, 1, 0]));
    }

    #[test]
    fn test_add_empty() {
        let sum = bin_add(&BitArray::default(), &BitArray::default()).unwrap();
        assert!(sum.is_empty());
    }

    #[test]
    fn test_add_commutativity() {
        let a = BitArray::from([1, 0, 1, 1, 0, 1]);
        let b = BitArray::from([0, 1, 1, 0, 1, 1]);

        assert_eq!(bin_add(&a, &b).unwrap(), bin_add(&b, &a).unwrap());
    }

    #[test]
    fn test_value() {
        assert_eq!(bin_value(&BitArray::from([0, 1, 1, 1])), Ok(7));
        assert_eq!(bin_value(&BitArray::from([1, 0, 0, 0, 0])), Ok(16));
        assert_eq!(bin_value(&BitArray::default()), Ok(0));
        assert_eq!(bin_value(&BitArray::from_values(&[5i32, 0, 9])), Ok(5));
    }

    #[test]
    fn test_value_full_128_bits() {
        let max = BitArray::from_values(&[1u8; 128]);
        assert_eq!(bin_value(&max), Ok(u128::MAX));
    }

    #[test]
    fn test_value_wide_with_leading_zeros() {
        // 200 bits, but the value is only 5
        let wide = BitArray::from_u128(5, 200);
        assert_eq!(bin_value(&wide), Ok(5));
    }

    #[test]
    fn test_value_rejects_129_bit_number() {
        // 1 followed by 128 zeros is 2^128
        let mut values = vec![0u8; 129];
        values[0] = 1;
        let too_big = BitArray::from_values(&values);

        assert_eq!(bin_value(&too_big), Err(ArithError::TooWide { width: 129 }));
    }

    #[test]
    fn test_floor_div_2() {
        let halved = floor_div_2(&BitArray::from([0, 1, 0, 1]));
        assert_eq!(halved, BitArray::from([0, 0, 1, 0]));
        assert_eq!(bin_value(&halved), Ok(2));

        let odd = BitArray::from([1, 1, 1]);
        assert_eq!(bin_value(&floor_div_2(&odd)), Ok(3));
        assert!(floor_div_2(&BitArray::default()).is_empty());
    }

    #[test]
    fn test_shift_toward_msb() {
        let a = BitArray::from([0, 1, 0, 1]);
        assert_eq!(bin_value(&shift_toward_msb(&a)), Ok(10));

        // MSB falls off the top
        let b = BitArray::from([1, 0, 0, 1]);
        assert_eq!(bin_value(&shift_toward_msb(&b)), Ok(2));
    }
}
