//! Textual form of bit sequences, one `0`/`1` character per bit.

use itertools::Itertools;

use crate::{Bit, HuffmanError, Result};

/// Parses a string of `0` and `1` characters. ASCII whitespace is skipped.
pub fn parse_bits(text: &str) -> Result<Vec<Bit>> {
    text.chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            other => Err(HuffmanError::InvalidBit(other)),
        })
        .collect()
}

pub fn format_bits(bits: &[Bit]) -> String {
    bits.iter().map(|&bit| if bit == 0 { '0' } else { '1' }).join("")
}
