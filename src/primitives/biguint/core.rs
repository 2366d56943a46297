//! Arbitrary-precision unsigned integer primitive
//!
//! This module defines `BigUint`, an unsigned integer of unbounded width.
//!
//! The value is stored as a vector of 32-bit digits in **big-endian** order
//! (most significant digit first), base 2³². The representation is always
//! canonical: leading zero digits are trimmed after every construction,
//! keeping at least one digit, so zero is stored as `[0]`.
//!
//! Because of this invariant, derived structural equality coincides with
//! numeric equality and with equality of the hexadecimal rendering.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, LowerHex, Result, UpperHex};

/// A single base-2³² digit.
pub type Digit = u32;

/// Width of a [`Digit`] in bits.
pub(crate) const DIGIT_BITS: usize = Digit::BITS as usize;

/// Arbitrary-precision unsigned integer.
///
/// Values are immutable: every arithmetic, bitwise or shift operation
/// returns a new `BigUint`. Operators are implemented for both owned values
/// and references, so `&a + &b` avoids cloning the operands.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigUint(pub(crate) Vec<Digit>);

impl BigUint {
    /// Returns the value zero.
    pub fn zero() -> Self {
        BigUint(vec![0])
    }

    /// Returns the value one.
    pub fn one() -> Self {
        BigUint(vec![1])
    }

    /// Builds a value from big-endian digits.
    ///
    /// Leading zero digits are discarded. An empty vector yields zero.
    pub fn from_digits(digits: Vec<Digit>) -> Self {
        Self::normalized(digits)
    }

    /// Trims leading zero digits, keeping at least one.
    pub(crate) fn normalized(mut digits: Vec<Digit>) -> Self {
        let zeros = digits.iter().take_while(|&&digit| digit == 0).count();
        let trim = zeros.min(digits.len().saturating_sub(1));

        digits.drain(..trim);

        if digits.is_empty() {
            digits.push(0);
        }

        BigUint(digits)
    }

    /// Returns the canonical digits, most significant first.
    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    /// Returns the number of digits in the canonical representation.
    ///
    /// Zero has one digit.
    pub fn digit_count(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        matches!(self.0.as_slice(), [0])
    }

    /// Returns the number of significant bits.
    ///
    /// Zero has no significant bits.
    pub fn bits(&self) -> usize {
        let top = self.0[0];

        (self.0.len() - 1) * DIGIT_BITS + (DIGIT_BITS - top.leading_zeros() as usize)
    }

    /// Counts the leading zero bits of the most significant digit.
    ///
    /// # Returns
    /// A number in the range `0..=32`; only zero itself returns 32.
    pub fn leading_zeros(&self) -> u32 {
        self.0[0].leading_zeros()
    }

    /// Returns the digits left-padded with zeros to `len` digits.
    ///
    /// `len` must not be smaller than the current digit count.
    pub(crate) fn padded(&self, len: usize) -> Vec<Digit> {
        debug_assert!(len >= self.0.len());

        let mut out = vec![0; len - self.0.len()];
        out.extend_from_slice(&self.0);

        out
    }

    /// Splits the value into a high part and a low part of `low_len` digits.
    pub(crate) fn split_digits(&self, low_len: usize) -> (BigUint, BigUint) {
        let padded = self.padded(self.0.len().max(2 * low_len));
        let (high, low) = padded.split_at(padded.len() - low_len);

        (
            BigUint::normalized(high.to_vec()),
            BigUint::normalized(low.to_vec()),
        )
    }

    fn write_hex(&self, f: &mut Formatter<'_>, upper: bool) -> Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        for (i, digit) in self.0.iter().enumerate() {
            match (i, upper) {
                (0, false) => write!(f, "{:x}", digit)?,
                (0, true) => write!(f, "{:X}", digit)?,
                (_, false) => write!(f, "{:08x}", digit)?,
                (_, true) => write!(f, "{:08X}", digit)?,
            }
        }

        Ok(())
    }
}

impl Default for BigUint {
    fn default() -> Self {
        BigUint::zero()
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical values: more digits means a larger number.
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for BigUint {
    /// Formats the value as lowercase hexadecimal without a prefix.
    ///
    /// The most significant digit is printed without padding, every
    /// following digit is zero-padded to eight characters.
    ///
    /// Example:
    /// `1000000000` for 2³²
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.write_hex(f, false)
    }
}

impl LowerHex for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.write_hex(f, false)
    }
}

impl UpperHex for BigUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.write_hex(f, true)
    }
}
