//! Binary number system primitives.
//!
//! This module provides the core types for working with fixed-width binary:
//! - [`Bit`] - A single binary digit (0 or 1)
//! - [`BitArray`] - A fixed-length, MSB-first sequence of bits
//! - [`arith`] - Ripple-carry addition, halving and value extraction

mod bit;
mod array;
mod ops;
mod int32;
pub mod arith;

pub use bit::Bit;
pub use array::{BitArray, ParseError};
pub use ops::BitOps;
pub use int32::{binary_int32_big, binary_int32_lit, INT32_WIDTH};
pub use arith::{bin_add, bin_value, floor_div_2, shift_toward_msb, ArithError};
