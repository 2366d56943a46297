//! Karatsuba multiplication for `BigUint`
//!
//! Both operands are left-padded to a common even digit count `2m` and split
//! into a high and a low half of `m` digits:
//!
//! ```text
//! a = a_hi·B^m + a_lo        c = c_hi·B^m + c_lo        (B = 2³²)
//!
//! ac    = a_hi·c_hi
//! bd    = a_lo·c_lo
//! cross = (a_hi + a_lo)·(c_hi + c_lo) − ac − bd
//!
//! a·c   = ac·B^2m + cross·B^m + bd
//! ```
//!
//! Recursion stops as soon as one operand is a single digit; that operand
//! is multiplied into the other digit by digit. With the `speed` feature,
//! operands shorter than [`KARATSUBA_THRESHOLD`] digits use the schoolbook
//! algorithm instead.

use std::ops::Mul;

use super::core::{BigUint, DIGIT_BITS, Digit};

/// Digit count below which the `speed` feature multiplies operands with the
/// schoolbook algorithm.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Product of two values, traced as a single span.
fn mul(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    let _scope = tracing::trace_span!(
        "karatsuba",
        lhs_digits = lhs.digit_count(),
        rhs_digits = rhs.digit_count(),
    )
    .entered();

    karatsuba(lhs, rhs)
}

/// Recursive Karatsuba step.
fn karatsuba(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    if lhs.is_zero() || rhs.is_zero() {
        return BigUint::zero();
    }

    if let [digit] = lhs.0.as_slice() {
        return mul_digit(rhs, *digit);
    }
    if let [digit] = rhs.0.as_slice() {
        return mul_digit(lhs, *digit);
    }

    if cfg!(feature = "speed")
        && (lhs.0.len() < KARATSUBA_THRESHOLD || rhs.0.len() < KARATSUBA_THRESHOLD)
    {
        return schoolbook(lhs, rhs);
    }

    let half = lhs.0.len().max(rhs.0.len()).div_ceil(2);

    let (a_hi, a_lo) = lhs.split_digits(half);
    let (c_hi, c_lo) = rhs.split_digits(half);

    let ac = karatsuba(&a_hi, &c_hi);
    let bd = karatsuba(&a_lo, &c_lo);
    let cross = karatsuba(&(&a_hi + &a_lo), &(&c_hi + &c_lo))
        .sub_unchecked(&ac)
        .sub_unchecked(&bd);

    let shift = half * DIGIT_BITS;

    (ac << (2 * shift)) + (cross << shift) + bd
}

/// Multiplies every digit of `value` by a single digit.
fn mul_digit(value: &BigUint, digit: Digit) -> BigUint {
    let mut out = vec![0 as Digit; value.0.len() + 1];
    let mut carry = 0u64;

    for (o, &d) in out.iter_mut().rev().zip(value.0.iter().rev()) {
        let product = d as u64 * digit as u64 + carry;
        *o = product as Digit;
        carry = product >> DIGIT_BITS;
    }
    out[0] = carry as Digit;

    BigUint::normalized(out)
}

/// Quadratic long multiplication over little-endian accumulators.
fn schoolbook(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    let lhs_le: Vec<u64> = lhs.0.iter().rev().map(|&d| d as u64).collect();
    let rhs_le: Vec<u64> = rhs.0.iter().rev().map(|&d| d as u64).collect();

    let mut acc = vec![0u64; lhs_le.len() + rhs_le.len()];

    for (i, &a) in lhs_le.iter().enumerate() {
        let mut carry = 0u64;

        for (j, &b) in rhs_le.iter().enumerate() {
            // (2³² − 1)² + 2·(2³² − 1) fits in 64 bits.
            let t = acc[i + j] + a * b + carry;
            acc[i + j] = t & Digit::MAX as u64;
            carry = t >> DIGIT_BITS;
        }

        acc[i + rhs_le.len()] = carry;
    }

    BigUint::normalized(acc.into_iter().rev().map(|d| d as Digit).collect())
}

forward_binop!(impl Mul, mul => mul);
