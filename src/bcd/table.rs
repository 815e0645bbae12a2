//! Decimal digit to 4-bit group table.

use once_cell::sync::Lazy;
use tracing::trace;
use crate::binary::{arith::ripple_add, Bit, BitArray};

/// Width of one BCD digit group.
pub const DIGIT_WIDTH: usize = 4;

/// 4-bit MSB-first groups for the digits 0 through 9.
///
/// Built on first access by counting up from `0000` with the adder.
static DIGIT_BITS: Lazy<[BitArray; 10]> = Lazy::new(|| {
    let one = BitArray::from([0, 0, 0, 1]);
    let mut next = BitArray::zero(DIGIT_WIDTH);
    let table = std::array::from_fn(|_| {
        let current = next.clone();
        next = ripple_add(&next, &one);
        current
    });
    trace!("built decimal digit table");
    table
});

/// The 4-bit group for a decimal digit character.
///
/// Returns `None` for anything other than ASCII `'0'..='9'`.
pub fn digit_bits(c: char) -> Option<&'static BitArray> {
    c.to_digit(10).map(|d| &DIGIT_BITS[d as usize])
}

/// What a group gains when its higher neighbour shifts out `bit`.
///
/// Half of one unit in the next higher decimal place is five units here.
pub(crate) fn halving_correction(bit: Bit) -> &'static BitArray {
    match bit {
        Bit::Zero => &DIGIT_BITS[0],
        Bit::One => &DIGIT_BITS[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::bin_value;

    #[test]
    fn test_table_values() {
        for (value, c) in ('0'..='9').enumerate() {
            let bits = digit_bits(c).unwrap();
            assert_eq!(bits.len(), DIGIT_WIDTH);
            assert_eq!(bin_value(bits), Ok(value as u128), "digit {}", c);
        }
    }

    #[test]
    fn test_known_groups() {
        assert_eq!(digit_bits('0').unwrap().to_string(), "0000");
        assert_eq!(digit_bits('5').unwrap().to_string(), "0101");
        assert_eq!(digit_bits('9').unwrap().to_string(), "1001");
    }

    #[test]
    fn test_non_digits() {
        assert!(digit_bits('a').is_none());
        assert!(digit_bits('-').is_none());
        // Non-ASCII digits are not decimal digits here
        assert!(digit_bits('٣').is_none());
    }

    #[test]
    fn test_correction() {
        assert!(halving_correction(Bit::Zero).is_zero());
        assert_eq!(bin_value(halving_correction(Bit::One)), Ok(5));
    }
}
