//! Conversions between `BigUint` and `u64`.

use crate::error::BigUintError;
use crate::primitives::BigUint;

/// Converts a `u64` into a `BigUint` of at most two digits.
impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        BigUint::normalized(vec![(value >> 32) as u32, value as u32])
    }
}

/// Attempts to convert a `BigUint` into a `u64`.
///
/// The conversion fails if the value needs more than two digits.
impl TryFrom<&BigUint> for u64 {
    type Error = BigUintError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        match value.0.as_slice() {
            [low] => Ok(*low as u64),
            [high, low] => Ok(((*high as u64) << 32) | *low as u64),
            _ => Err(BigUintError::Overflow),
        }
    }
}

impl TryFrom<BigUint> for u64 {
    type Error = BigUintError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        u64::try_from(&value)
    }
}
