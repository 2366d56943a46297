//! Arbitrary-precision unsigned integer primitive
//!
//! This module defines the `BigUint` type, an unsigned integer of unbounded
//! width stored as big-endian 32-bit digits.
//!
//! It is split by concern:
//! - `core`: representation, canonical form, ordering and formatting
//! - `parse`: construction from hexadecimal text
//! - `ops`: bitwise logic, shifts, addition, subtraction and complement
//! - `mul`: Karatsuba multiplication
//! - `div`: long division and remainder
//! - `conv`: conversions from and to native integers and bytes

/// Implements a binary operator for every owned/borrowed operand pairing by
/// forwarding to a function over two references.
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident => $func:path) => {
        impl $imp<BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> Self::Output {
                $func(&self, &rhs)
            }
        }

        impl $imp<&BigUint> for BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> Self::Output {
                $func(&self, rhs)
            }
        }

        impl $imp<BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: BigUint) -> Self::Output {
                $func(self, &rhs)
            }
        }

        impl $imp<&BigUint> for &BigUint {
            type Output = BigUint;

            fn $method(self, rhs: &BigUint) -> Self::Output {
                $func(self, rhs)
            }
        }
    };
}

mod conv;
mod core;
mod div;
mod mul;
mod ops;
mod parse;

/// Arbitrary-precision unsigned integer.
pub use self::core::{BigUint, Digit};

/// Digit count below which the `speed` feature switches to schoolbook
/// multiplication.
pub use mul::KARATSUBA_THRESHOLD;
