//! Bitwise, shift, additive and complement operations for `BigUint`
//!
//! Binary operations right-align their operands: the shorter digit vector
//! is left-padded with zero digits before digits are combined from the
//! least significant end. Every result is returned in canonical form.
//!
//! Addition is exact (the result grows when the final carry is set).
//! Subtraction fails on underflow: `try_sub` and `checked_sub` report it,
//! the `-` operator panics.

use std::iter;
use std::ops::{Add, BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub};

use super::core::{BigUint, DIGIT_BITS, Digit};
use crate::error::BigUintError;

/// Combines right-aligned digits pairwise with `op`.
fn zip_digits(lhs: &BigUint, rhs: &BigUint, op: impl Fn(Digit, Digit) -> Digit) -> BigUint {
    let len = lhs.0.len().max(rhs.0.len());
    let (l, r) = (lhs.padded(len), rhs.padded(len));

    BigUint::normalized(l.iter().zip(r.iter()).map(|(&a, &b)| op(a, b)).collect())
}

/// Bitwise XOR of two values.
fn xor(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    zip_digits(lhs, rhs, |a, b| a ^ b)
}

/// Bitwise OR of two values.
fn or(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    zip_digits(lhs, rhs, |a, b| a | b)
}

/// Bitwise AND of two values.
fn and(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    zip_digits(lhs, rhs, |a, b| a & b)
}

/// Iterates digits from least to most significant, then zeros forever.
fn digits_le(digits: &[Digit]) -> impl Iterator<Item = Digit> + '_ {
    digits.iter().rev().copied().chain(iter::repeat(0))
}

/// Exact addition; the final carry becomes a new digit.
fn add(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    let len = lhs.0.len().max(rhs.0.len());
    let mut out = vec![0 as Digit; len + 1];
    let mut carry = 0u64;

    for ((o, a), b) in out
        .iter_mut()
        .rev()
        .zip(digits_le(&lhs.0))
        .zip(digits_le(&rhs.0))
    {
        let sum = a as u64 + b as u64 + carry;
        *o = sum as Digit;
        carry = sum >> DIGIT_BITS;
    }

    BigUint::normalized(out)
}

/// Digit-wise subtraction with borrow. Returns the digits and whether a
/// borrow was left over past the most significant digit.
fn sub_digits(lhs: &[Digit], rhs: &[Digit]) -> (Vec<Digit>, bool) {
    let len = lhs.len().max(rhs.len());
    let mut out = vec![0 as Digit; len];
    let mut borrow = 0i64;

    for ((o, a), b) in out.iter_mut().rev().zip(digits_le(lhs)).zip(digits_le(rhs)) {
        let diff = a as i64 - b as i64 - borrow;

        if diff >= 0 {
            *o = diff as Digit;
            borrow = 0;
        } else {
            *o = (diff + (1i64 << DIGIT_BITS)) as Digit;
            borrow = 1;
        }
    }

    (out, borrow != 0)
}

impl BigUint {
    /// Subtracts `rhs`, which the caller guarantees is not larger than `self`.
    pub(crate) fn sub_unchecked(&self, rhs: &BigUint) -> BigUint {
        let (digits, borrow) = sub_digits(&self.0, &rhs.0);
        debug_assert!(!borrow, "subtraction underflow");

        BigUint::normalized(digits)
    }

    /// Subtracts `rhs` from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`BigUintError::Underflow`] if `rhs` is larger than `self`.
    pub fn try_sub(&self, rhs: &BigUint) -> Result<BigUint, BigUintError> {
        if self < rhs {
            tracing::debug!(
                minuend_bits = self.bits(),
                subtrahend_bits = rhs.bits(),
                "subtraction underflow"
            );
            return Err(BigUintError::Underflow);
        }

        Ok(self.sub_unchecked(rhs))
    }

    /// Subtracts `rhs` from `self`, returning `None` on underflow.
    pub fn checked_sub(&self, rhs: &BigUint) -> Option<BigUint> {
        (self >= rhs).then(|| self.sub_unchecked(rhs))
    }
}

/// Subtraction, panicking when `rhs` exceeds `lhs`.
fn sub(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    assert!(lhs >= rhs, "attempt to subtract with underflow");

    lhs.sub_unchecked(rhs)
}

forward_binop!(impl BitXor, bitxor => xor);
forward_binop!(impl BitOr, bitor => or);
forward_binop!(impl BitAnd, bitand => and);
forward_binop!(impl Add, add => add);
forward_binop!(impl Sub, sub => sub);

/// Left shift by any number of bits.
fn shl_bits(value: &BigUint, shift: usize) -> BigUint {
    if value.is_zero() {
        return BigUint::zero();
    }

    let digit_shift = shift / DIGIT_BITS;
    let bit_shift = (shift % DIGIT_BITS) as u32;

    let mut out = Vec::with_capacity(value.0.len() + digit_shift + 1);

    if bit_shift == 0 {
        out.extend_from_slice(&value.0);
    } else {
        let spill = DIGIT_BITS as u32 - bit_shift;

        out.push(value.0[0] >> spill);
        for (i, &digit) in value.0.iter().enumerate() {
            let next = value.0.get(i + 1).map_or(0, |&n| n >> spill);
            out.push((digit << bit_shift) | next);
        }
    }

    out.resize(out.len() + digit_shift, 0);

    BigUint::normalized(out)
}

/// Right shift by any number of bits.
fn shr_bits(value: &BigUint, shift: usize) -> BigUint {
    if shift >= value.0.len() * DIGIT_BITS {
        return BigUint::zero();
    }

    let digit_shift = shift / DIGIT_BITS;
    let bit_shift = (shift % DIGIT_BITS) as u32;
    let kept = &value.0[..value.0.len() - digit_shift];

    if bit_shift == 0 {
        return BigUint::normalized(kept.to_vec());
    }

    let spill = DIGIT_BITS as u32 - bit_shift;
    let mut out = Vec::with_capacity(kept.len());
    let mut carry: Digit = 0;

    for &digit in kept {
        out.push((digit >> bit_shift) | carry);
        carry = digit << spill;
    }

    BigUint::normalized(out)
}

/// Logical left shift (`<<`) by a number of bits.
///
/// Shifting by a multiple of 32 appends whole zero digits.
impl Shl<usize> for &BigUint {
    type Output = BigUint;

    fn shl(self, rhs: usize) -> Self::Output {
        shl_bits(self, rhs)
    }
}

impl Shl<usize> for BigUint {
    type Output = BigUint;

    fn shl(self, rhs: usize) -> Self::Output {
        shl_bits(&self, rhs)
    }
}

/// Logical right shift (`>>`) by a number of bits.
///
/// Shifts greater than or equal to the digit width of the value yield zero.
impl Shr<usize> for &BigUint {
    type Output = BigUint;

    fn shr(self, rhs: usize) -> Self::Output {
        shr_bits(self, rhs)
    }
}

impl Shr<usize> for BigUint {
    type Output = BigUint;

    fn shr(self, rhs: usize) -> Self::Output {
        shr_bits(&self, rhs)
    }
}

/// Bitwise complement of every digit over its full 32-bit width.
impl Not for &BigUint {
    type Output = BigUint;

    fn not(self) -> Self::Output {
        BigUint::normalized(self.0.iter().map(|&digit| !digit).collect())
    }
}

impl Not for BigUint {
    type Output = BigUint;

    fn not(self) -> Self::Output {
        !&self
    }
}
