// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::key::PrivateKey;
use crate::util::{l_function, to_bytes_minimal};

/// A trait that enables decrypting a single ciphertext.
pub trait Decrypt {
    /// Decrypt a ciphertext into the minimal big-endian form of the
    /// plaintext integer.
    ///
    /// Every ciphertext value below n² decrypts to some value below n.
    /// Forged or wrong-key ciphertexts are not detected; they produce
    /// well-formed garbage.
    ///
    /// ## Error
    ///
    /// Fails with [`Error::MessageTooLarge`] when the ciphertext value
    /// is ≥ n².
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>>;
}

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
        let c = ciphertext.value();
        if c >= &self.public_key.n_squared {
            return Err(Error::MessageTooLarge);
        }

        // One exponentiation per prime factor, each over the half-width
        // modulus: m ≡ L(c^(x-1) mod x²) · H(x) (mod x) for x ∈ {p, q}.
        let cp = c.modpow(&self.p_minus_one, &self.p_squared);
        let mp = (l_function(&cp, &self.p) * &self.hp) % &self.p;

        let cq = c.modpow(&self.q_minus_one, &self.q_squared);
        let mq = (l_function(&cq, &self.q) * &self.hq) % &self.q;

        Ok(to_bytes_minimal(&self.recombine(mp, mq)))
    }
}

impl PrivateKey {
    /// Recombine the per-prime residues into m mod n.
    ///
    /// m = mp + p · ((mq - mp) · p⁻¹ mod q)
    ///
    /// mp can exceed mq, so it is reduced mod q and the difference is
    /// lifted by one q to stay unsigned.
    fn recombine(&self, mp: BigUint, mq: BigUint) -> BigUint {
        let u = ((mq + &self.q - (&mp % &self.q)) * &self.p_inv_q) % &self.q;
        (mp + u * &self.p) % &self.public_key.n
    }
}
