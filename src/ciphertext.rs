// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

use crate::util;

/// An encrypted value, an integer in `[0, n²)` for some public key.
///
/// A ciphertext carries no reference to the key that produced it. Feeding it
/// to the wrong private key decrypts without error and yields garbage; the
/// byte form round-trips through [`Ciphertext::from_bytes`] untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    value: BigUint,
}

impl Ciphertext {
    /// Wraps a raw ciphertext value.
    pub fn new(value: BigUint) -> Self {
        Self { value }
    }

    /// Reconstructs a ciphertext from its big-endian byte encoding.
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self {
            value: BigUint::from_bytes_be(bytes.as_ref()),
        }
    }

    /// The ciphertext as an integer.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Minimal big-endian byte encoding. The zero ciphertext encodes as the
    /// empty string.
    pub fn to_bytes(&self) -> Vec<u8> {
        util::to_bytes_minimal(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;

    use super::*;

    #[test]
    fn byte_form_round_trips() {
        let original = Ciphertext::new(BigUint::from(0xdead_beefu32));
        let restored = Ciphertext::from_bytes(original.to_bytes());
        assert_eq!(original, restored);
    }

    #[test]
    fn zero_serializes_as_empty() {
        let zero = Ciphertext::new(BigUint::zero());
        assert!(zero.to_bytes().is_empty());
        assert_eq!(Ciphertext::from_bytes([]), zero);
    }
}
