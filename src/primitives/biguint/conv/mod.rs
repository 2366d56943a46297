//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between `BigUint`
//! and native integer types or byte strings.
//!
//! Each submodule is responsible for conversions to and from a specific
//! integer width, following these principles:
//! - widening conversions (`From`) are infallible
//! - narrowing conversions (`TryFrom`) fail with `BigUintError::Overflow`
//!   when the value does not fit
//! - big-endian semantics throughout

mod bytes;
mod u128;
mod u16;
mod u32;
mod u64;
mod u8;
mod usize;

use super::core::{BigUint, DIGIT_BITS, Digit};

impl BigUint {
    /// Returns the value as a `u128` if it has at most four digits.
    pub(crate) fn to_u128(&self) -> Option<u128> {
        if self.0.len() > 4 {
            return None;
        }

        Some(
            self.0
                .iter()
                .fold(0u128, |acc, &digit| (acc << DIGIT_BITS) | digit as u128),
        )
    }

    /// Builds a value from a `u128`.
    pub(crate) fn from_u128(value: u128) -> Self {
        let digits: Vec<Digit> = (0..4)
            .rev()
            .map(|i| (value >> (i * DIGIT_BITS)) as Digit)
            .collect();

        BigUint::normalized(digits)
    }
}
