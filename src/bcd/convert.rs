//! Decimal string to binary string conversion.
//!
//! The decimal number is held as one 4-bit BCD group per digit and halved
//! repeatedly. Each halving shifts out the next binary digit (LSB first)
//! from the lowest group; a bit shifted out of any higher group re-enters
//! the group below it as a correction of 5.

use std::fmt;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};
use crate::bcd::table::{digit_bits, halving_correction};
use crate::binary::{arith::ripple_add, floor_div_2, Bit, BitArray};

/// Errors from decimal input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("empty decimal string")]
    Empty,

    #[error("invalid decimal digit '{ch}' at position {position}")]
    InvalidDigit { ch: char, position: usize },
}

/// Split a decimal digit string into 4-bit groups, most significant first.
pub fn dec2bin_array(s: &str) -> Result<Vec<BitArray>, ConvertError> {
    if s.is_empty() {
        return Err(ConvertError::Empty);
    }
    s.chars()
        .enumerate()
        .map(|(position, ch)| {
            digit_bits(ch)
                .cloned()
                .ok_or(ConvertError::InvalidDigit { ch, position })
        })
        .collect()
}

/// Iterator over the binary digits of a decimal number, LSB first.
///
/// Every call to `next` performs one halving step on the BCD groups. The
/// iterator ends once all groups are zero, so a zero input yields nothing.
#[derive(Debug, Clone)]
pub struct Halving {
    groups: Vec<BitArray>,
}

impl Halving {
    /// Start halving the number written as `s`.
    pub fn new(s: &str) -> Result<Self, ConvertError> {
        Ok(Self { groups: dec2bin_array(s)? })
    }

    /// The BCD groups as they stand before the next step.
    pub fn groups(&self) -> &[BitArray] {
        &self.groups
    }

    /// True once every group has reached zero.
    pub fn is_done(&self) -> bool {
        self.groups.iter().all(BitArray::is_zero)
    }

    fn step(&mut self) -> Bit {
        let out = self.groups.last().map(BitArray::lsb).unwrap_or_default();

        // The lowest group's LSB leaves the number; every other LSB moves down
        let carries: Vec<Bit> = self.groups
            .iter()
            .take(self.groups.len().saturating_sub(1))
            .map(BitArray::lsb)
            .collect();

        for group in self.groups.iter_mut() {
            *group = floor_div_2(group);
        }

        for (group, carry) in self.groups.iter_mut().skip(1).zip(carries) {
            if carry.is_one() {
                *group = ripple_add(group, halving_correction(carry));
            }
        }

        out
    }
}

impl Iterator for Halving {
    type Item = Bit;

    fn next(&mut self) -> Option<Bit> {
        if self.is_done() {
            return None;
        }
        let bit = self.step();
        trace!(bit = bit.to_u8(), groups = ?self.groups, "halving step");
        Some(bit)
    }
}

/// Convert a decimal digit string to a `"0b"`-prefixed binary string.
///
/// Leading zeros in the input are accepted; the output has none, except
/// that zero itself converts to `"0b0"`.
pub fn dec2bin(s: &str) -> Result<String, ConvertError> {
    debug!(input = s, "converting decimal to binary");
    let bits: Vec<Bit> = Halving::new(s)?.collect();
    let binary = join_lsb_first(&bits);
    debug!(input = s, %binary, steps = bits.len(), "conversion done");
    Ok(binary)
}

/// Convert like [`dec2bin`], recording every halving step.
pub fn dec2bin_trace(s: &str) -> Result<Conversion, ConvertError> {
    debug!(input = s, "tracing decimal to binary conversion");
    let mut halving = Halving::new(s)?;
    let mut steps = Vec::new();

    loop {
        let groups = halving.groups().to_vec();
        match halving.next() {
            Some(bit) => steps.push(Step { groups, bit }),
            None => break,
        }
    }

    let bits: Vec<Bit> = steps.iter().map(|step| step.bit).collect();
    let binary = join_lsb_first(&bits);
    debug!(input = s, %binary, steps = steps.len(), "conversion done");
    Ok(Conversion {
        input: s.to_string(),
        binary,
        steps,
    })
}

fn join_lsb_first(bits: &[Bit]) -> String {
    if bits.is_empty() {
        return "0b0".to_string();
    }
    let digits: String = bits.iter().rev().map(|b| b.to_char()).collect();
    format!("0b{}", digits)
}

/// One halving step: the groups it started from and the bit it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub groups: Vec<BitArray>,
    pub bit: Bit,
}

/// A complete decimal to binary conversion with its reduction trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub steps: Vec<Step>,
    pub binary: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.input)?;
        for (i, step) in self.steps.iter().enumerate() {
            let groups: Vec<String> = step.groups.iter().map(|g| g.to_string()).collect();
            writeln!(f, "  {:3}: {}  -> {}", i, groups.join(" "), step.bit)?;
        }
        write!(f, "= {}", self.binary)
    }
}
