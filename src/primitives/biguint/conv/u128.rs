//! Conversions between `BigUint` and `u128`.

use crate::error::BigUintError;
use crate::primitives::BigUint;

/// Converts a `u128` into a `BigUint` of at most four digits.
impl From<u128> for BigUint {
    fn from(value: u128) -> Self {
        BigUint::from_u128(value)
    }
}

/// Attempts to convert a `BigUint` into a `u128`.
///
/// The conversion fails if the value needs more than four digits.
impl TryFrom<&BigUint> for u128 {
    type Error = BigUintError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        value.to_u128().ok_or(BigUintError::Overflow)
    }
}

impl TryFrom<BigUint> for u128 {
    type Error = BigUintError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        u128::try_from(&value)
    }
}
