//! Primitive types
//!
//! This module defines the arbitrary-precision unsigned integer used by the
//! crate.
//!
//! Current primitives include:
//! - `BigUint`: an unbounded unsigned integer stored as big-endian 32-bit
//!   digits
//!
//! Conversions from and to native integer types live next to the type, split
//! by integer width.

mod biguint;

/// Arbitrary-precision unsigned integer and its digit type.
pub use biguint::{BigUint, Digit, KARATSUBA_THRESHOLD};
