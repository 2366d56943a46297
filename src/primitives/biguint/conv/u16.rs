//! Conversions between `BigUint` and `u16`.

use crate::error::BigUintError;
use crate::primitives::BigUint;

impl From<u16> for BigUint {
    fn from(value: u16) -> Self {
        BigUint::from(value as u32)
    }
}

/// Attempts to convert a `BigUint` into a `u16`.
impl TryFrom<&BigUint> for u16 {
    type Error = BigUintError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        u32::try_from(value).and_then(|v| u16::try_from(v).map_err(|_| BigUintError::Overflow))
    }
}

impl TryFrom<BigUint> for u16 {
    type Error = BigUintError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        u16::try_from(&value)
    }
}
