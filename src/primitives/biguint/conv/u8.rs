//! Conversions between `BigUint` and `u8`.

use crate::error::BigUintError;
use crate::primitives::BigUint;

impl From<u8> for BigUint {
    fn from(value: u8) -> Self {
        BigUint::from(value as u32)
    }
}

/// Attempts to convert a `BigUint` into a `u8`.
impl TryFrom<&BigUint> for u8 {
    type Error = BigUintError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        u32::try_from(value).and_then(|v| u8::try_from(v).map_err(|_| BigUintError::Overflow))
    }
}

impl TryFrom<BigUint> for u8 {
    type Error = BigUintError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        u8::try_from(&value)
    }
}
