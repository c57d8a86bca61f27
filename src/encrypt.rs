// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::One;
use rand::rngs::OsRng;

use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::key::PublicKey;
use crate::sampling;

/// The blinding value drawn for a single encryption.
pub type Nonce = BigUint;

/// A trait that enables encrypting a single plaintext.
pub trait Encrypt {
    /// Encrypt a plaintext under a fresh random nonce.
    ///
    /// The plaintext bytes are read as a big-endian integer m, which must
    /// be strictly smaller than the modulus `n`.
    ///
    /// ## Error
    ///
    /// Fails with [`Error::MessageTooLarge`] when m ≥ n, and with
    /// [`Error::RandomSource`] when the system entropy source fails.
    fn encrypt<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<Ciphertext>;
}

impl Encrypt for PublicKey {
    fn encrypt<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<Ciphertext> {
        self.encrypt_and_nonce(plaintext).map(|(c, _)| c)
    }
}

impl PublicKey {
    /// Encrypt under a fresh random nonce and return the nonce next to the
    /// ciphertext.
    ///
    /// The nonce is drawn uniformly from `[0, n)`. Zero and the multiples
    /// of the prime factors yield undecryptable ciphertexts; their density
    /// is negligible at real key sizes and no re-draw is attempted, which
    /// keeps the draw pattern identical for every message.
    pub fn encrypt_and_nonce<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<(Ciphertext, Nonce)> {
        let mut rng = OsRng;
        let nonce = sampling::uniform_below(&self.n, &mut rng)?;

        let ciphertext = self.encrypt_with_nonce(&nonce, plaintext)?;
        Ok((ciphertext, nonce))
    }

    /// Encrypt deterministically under a caller-supplied nonce.
    ///
    /// c = (1 + m·n) · rⁿ mod n²
    ///
    /// With g = n + 1, g^m ≡ 1 + m·n (mod n²) by the binomial theorem, so
    /// the message part costs one multiplication instead of a modular
    /// exponentiation.
    pub fn encrypt_with_nonce<P: AsRef<[u8]>>(
        &self,
        nonce: &Nonce,
        plaintext: P,
    ) -> Result<Ciphertext> {
        let m = BigUint::from_bytes_be(plaintext.as_ref());
        if m >= self.n {
            return Err(Error::MessageTooLarge);
        }

        let gm = (BigUint::one() + m * &self.n) % &self.n_squared;
        let rn = nonce.modpow(&self.n, &self.n_squared);

        Ok(Ciphertext::new((gm * rn) % &self.n_squared))
    }
}
