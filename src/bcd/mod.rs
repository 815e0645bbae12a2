//! Binary-coded decimal conversion.
//!
//! - [`digit_bits`] - the read-only digit to 4-bit group table
//! - [`dec2bin`] - decimal digit string to binary string by BCD halving

mod table;
mod convert;

pub use table::{digit_bits, DIGIT_WIDTH};
pub use convert::{dec2bin, dec2bin_array, dec2bin_trace, Conversion, ConvertError, Halving, Step};
