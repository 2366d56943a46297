//! Arbitrary-precision unsigned integers
//!
//! This crate provides `BigUint`, an unsigned integer of unbounded width
//! stored as a big-endian sequence of 32-bit digits. Values are created from
//! hexadecimal text (or native integers) and rendered back to hexadecimal
//! text.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `BigUint` value type together with its operator implementations:
//!   bitwise logic, bit shifts, addition, subtraction, Karatsuba
//!   multiplication, long division and complement.
//!
//! - `error`
//!   Error types returned by parsing and by the fallible arithmetic
//!   operations (`try_sub`, `try_div`, `div_rem`, ...).
//!
//! # Design goals
//!
//! - Canonical representation: no superfluous leading zero digits, so that
//!   equality never depends on how a value was built
//! - Immutable values: every operation returns a new `BigUint`
//! - Explicit failure for underflow and division by zero
//!
//! # Cargo features
//!
//! - `speed`
//!   Multiplies short operands with the schoolbook algorithm instead of
//!   recursing Karatsuba down to single digits.
//!
//! The crate emits `tracing` spans for multiplication and division but never
//! installs a subscriber.

pub mod error;
pub mod primitives;

pub use error::{BigUintError, ParseError};
pub use primitives::BigUint;
