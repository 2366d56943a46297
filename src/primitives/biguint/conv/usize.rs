//! Conversions between `BigUint` and `usize`.
//!
//! `usize` is converted through `u64`, which holds every supported pointer
//! width.

use crate::error::BigUintError;
use crate::primitives::BigUint;

impl From<usize> for BigUint {
    fn from(value: usize) -> Self {
        BigUint::from(value as u64)
    }
}

/// Attempts to convert a `BigUint` into a `usize`.
///
/// The conversion fails if the value exceeds `usize::MAX` on the target.
impl TryFrom<&BigUint> for usize {
    type Error = BigUintError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        u64::try_from(value).and_then(|v| usize::try_from(v).map_err(|_| BigUintError::Overflow))
    }
}

impl TryFrom<BigUint> for usize {
    type Error = BigUintError;

    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        usize::try_from(&value)
    }
}
