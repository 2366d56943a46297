//! Conversions between `BigUint` and big-endian byte strings.

use crate::primitives::{BigUint, Digit};

impl BigUint {
    /// Builds a value from big-endian bytes.
    ///
    /// Leading zero bytes are ignored; an empty slice yields zero.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut digits: Vec<Digit> = bytes
            .rchunks(4)
            .map(|chunk| chunk.iter().fold(0, |acc, &b| (acc << 8) | b as Digit))
            .collect();
        digits.reverse();

        BigUint::normalized(digits)
    }

    /// Returns the minimal big-endian byte encoding of the value.
    ///
    /// Zero is encoded as a single `0` byte.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let bytes: Vec<u8> = self.0.iter().flat_map(|d| d.to_be_bytes()).collect();
        let zeros = bytes.iter().take_while(|&&b| b == 0).count();

        bytes[zeros.min(bytes.len() - 1)..].to_vec()
    }
}

/// Exposes the canonical digits, most significant first.
impl AsRef<[Digit]> for BigUint {
    fn as_ref(&self) -> &[Digit] {
        &self.0
    }
}
