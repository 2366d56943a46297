//! Error types
//!
//! Fallible `BigUint` operations report failures through the types defined
//! here. Operators (`-`, `/`, `%`) keep the native integer contract and panic
//! instead; their `try_*` and `checked_*` counterparts never do.

/// Errors produced while parsing hexadecimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input contained no digits at all.
    #[error("cannot parse an integer from an empty string")]
    Empty,

    /// A character outside `0-9`, `a-f` and `A-F` was found.
    #[error("invalid hexadecimal digit {character:?} at index {index}")]
    InvalidDigit { index: usize, character: char },
}

/// Errors produced by fallible `BigUint` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BigUintError {
    /// The input text is not a valid hexadecimal integer.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The divisor is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The subtrahend is larger than the minuend.
    #[error("subtraction underflow: subtrahend exceeds minuend")]
    Underflow,

    /// The value does not fit in the requested native integer type.
    #[error("value does not fit in the target integer type")]
    Overflow,
}
