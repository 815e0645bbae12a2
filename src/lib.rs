//! # binconv
//!
//! Base-2 and base-10 numeral conversion routines.
//!
//! Fixed-width bit arrays with a ripple-carry adder, 32-bit integer
//! encoders, and a decimal-to-binary converter that works by halving a
//! binary-coded decimal number one bit at a time.

pub mod binary;
pub mod bcd;

// Re-export commonly used types
pub use binary::{
    Bit, BitArray, BitOps, ArithError, ParseError,
    bin_add, bin_value, floor_div_2, binary_int32_big, binary_int32_lit,
};
pub use bcd::{dec2bin, dec2bin_array, dec2bin_trace, Conversion, ConvertError, Halving};
