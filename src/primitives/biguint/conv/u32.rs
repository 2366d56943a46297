//! Conversions between `BigUint` and `u32`.
//!
//! A `u32` is exactly one digit wide.

use crate::error::BigUintError;
use crate::primitives::BigUint;

/// Converts a `u32` into a single-digit `BigUint`.
impl From<u32> for BigUint {
    fn from(value: u32) -> Self {
        BigUint(vec![value])
    }
}

/// Attempts to convert a `BigUint` into a `u32`.
///
/// The conversion succeeds only if the value has a single digit.
impl TryFrom<&BigUint> for u32 {
    type Error = BigUintError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        match value.0.as_slice() {
            [digit] => Ok(*digit),
            _ => Err(BigUintError::Overflow),
        }
    }
}

impl TryFrom<BigUint> for u32 {
    type Error = BigUintError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        u32::try_from(&value)
    }
}
