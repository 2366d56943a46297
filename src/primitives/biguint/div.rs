//! Long division for `BigUint`
//!
//! Division subtracts power-of-two multiples of the divisor: while the
//! remainder is not smaller than the divisor, the largest `divisor·2^k` that
//! still fits is removed from the remainder and `2^k` is added to the
//! quotient.
//!
//! A zero divisor is reported as [`BigUintError::DivisionByZero`] by the
//! fallible methods; the `/` and `%` operators panic instead.

use std::ops::{Div, Rem};

use super::core::BigUint;
use crate::error::BigUintError;

impl BigUint {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// Returns [`BigUintError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigUint) -> Result<(BigUint, BigUint), BigUintError> {
        if divisor.is_zero() {
            tracing::debug!(dividend_bits = self.bits(), "division by zero");
            return Err(BigUintError::DivisionByZero);
        }

        Ok(div_rem_nonzero(self, divisor))
    }

    /// Divides `self` by `divisor`, discarding the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`BigUintError::DivisionByZero`] if `divisor` is zero.
    pub fn try_div(&self, divisor: &BigUint) -> Result<BigUint, BigUintError> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Divides `self` by `divisor`, returning `None` if `divisor` is zero.
    pub fn checked_div(&self, divisor: &BigUint) -> Option<BigUint> {
        self.try_div(divisor).ok()
    }

    /// Remainder of `self / divisor`, or `None` if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &BigUint) -> Option<BigUint> {
        self.div_rem(divisor).ok().map(|(_, remainder)| remainder)
    }
}

/// Long division by a divisor known to be nonzero.
fn div_rem_nonzero(dividend: &BigUint, divisor: &BigUint) -> (BigUint, BigUint) {
    let _scope = tracing::trace_span!(
        "long division",
        dividend_bits = dividend.bits(),
        divisor_bits = divisor.bits(),
    )
    .entered();

    let mut quotient = BigUint::zero();
    let mut remainder = dividend.clone();

    while remainder >= *divisor {
        // Doubling the divisor until it passes the remainder stops at the
        // bit-length difference or one below it.
        let mut factor = remainder.bits() - divisor.bits();
        let mut multiple = divisor << factor;

        if multiple > remainder {
            factor -= 1;
            multiple = divisor << factor;
        }

        remainder = remainder.sub_unchecked(&multiple);
        quotient = quotient + (BigUint::one() << factor);
    }

    (quotient, remainder)
}

/// Quotient, panicking on a zero divisor.
fn div(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    assert!(!rhs.is_zero(), "division by zero");

    div_rem_nonzero(lhs, rhs).0
}

/// Remainder, panicking on a zero divisor.
fn rem(lhs: &BigUint, rhs: &BigUint) -> BigUint {
    assert!(!rhs.is_zero(), "division by zero");

    div_rem_nonzero(lhs, rhs).1
}

forward_binop!(impl Div, div => div);
forward_binop!(impl Rem, rem => rem);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotient_and_remainder_of_small_values() {
        let (q, r) = div_rem_nonzero(&BigUint::from(100u32), &BigUint::from(7u32));

        assert_eq!(q, BigUint::from(14u32));
        assert_eq!(r, BigUint::from(2u32));
    }

    #[test]
    fn dividend_smaller_than_divisor() {
        let divisor = BigUint::from_digits(vec![1, 0]);
        let (q, r) = div_rem_nonzero(&BigUint::from(3u32), &divisor);

        assert!(q.is_zero());
        assert_eq!(r, BigUint::from(3u32));
    }
}
