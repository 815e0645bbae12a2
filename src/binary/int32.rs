//! 32-bit unsigned integer to bit string encoders.

/// Number of bits produced by the 32-bit encoders.
pub const INT32_WIDTH: u32 = 32;

/// Encode `x` as 32 binary digits, most significant bit first.
///
/// Walks the powers of two from 2^31 down to 2^0, emitting a `1` and
/// subtracting the power whenever it still fits into the remainder.
pub fn binary_int32_big(x: u32) -> String {
    let mut remainder = x;
    let mut digits = String::with_capacity(INT32_WIDTH as usize);

    for p in (0..INT32_WIDTH).rev() {
        let power = 1u32 << p;
        if remainder >= power {
            digits.push('1');
            remainder -= power;
        } else {
            digits.push('0');
        }
    }

    digits
}

/// Encode `x` as 32 binary digits, least significant bit first.
///
/// Repeatedly emits `x % 2` and halves `x`, 32 times.
pub fn binary_int32_lit(x: u32) -> String {
    let mut x = x;
    let mut digits = String::with_capacity(INT32_WIDTH as usize);

    for _ in 0..INT32_WIDTH {
        digits.push(if x % 2 == 1 { '1' } else { '0' });
        x /= 2;
    }

    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_endian_known_values() {
        assert_eq!(binary_int32_big(0), "0".repeat(32));
        assert_eq!(binary_int32_big(5), format!("{}101", "0".repeat(29)));
        assert_eq!(binary_int32_big(u32::MAX), "1".repeat(32));
        assert_eq!(binary_int32_big(1 << 31), format!("1{}", "0".repeat(31)));
    }

    #[test]
    fn test_little_endian_known_values() {
        assert_eq!(binary_int32_lit(0), "0".repeat(32));
        assert_eq!(binary_int32_lit(5), format!("101{}", "0".repeat(29)));
        assert_eq!(binary_int32_lit(6), format!("011{}", "0".repeat(29)));
    }

    #[test]
    fn test_matches_std_formatting() {
        for x in [0u32, 1, 2, 913, 1042, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(binary_int32_big(x), format!("{:032b}", x));
        }
    }

    #[test]
    fn test_big_reversed_is_little() {
        for x in [1u32, 7, 12345, 0x8000_0001] {
            let reversed: String = binary_int32_big(x).chars().rev().collect();
            assert_eq!(reversed, binary_int32_lit(x));
        }
    }
}
