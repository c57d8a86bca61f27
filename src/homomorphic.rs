// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Homomorphic operations on ciphertexts.
//!
//! Multiplying two ciphertexts mod n² adds their plaintexts mod n, and
//! raising a ciphertext to a constant multiplies its plaintext by that
//! constant. All three operations are infallible: any ciphertext value is
//! reduced mod n², and out-of-range inputs simply produce garbage that
//! still decrypts.

use num_bigint_dig::BigUint;

use crate::ciphertext::Ciphertext;
use crate::key::PublicKey;

impl PublicKey {
    /// Add two encrypted values. The result decrypts to `(m1 + m2) mod n`.
    ///
    /// c = c1 · c2 mod n²
    pub fn add_ciphertexts(&self, c1: &Ciphertext, c2: &Ciphertext) -> Ciphertext {
        Ciphertext::new((c1.value() * c2.value()) % &self.n_squared)
    }

    /// Add a plaintext constant to an encrypted value. The result decrypts
    /// to `(m + k) mod n`.
    ///
    /// c' = c · gᵏ mod n²
    pub fn add_constant<K: AsRef<[u8]>>(&self, c: &Ciphertext, constant: K) -> Ciphertext {
        let k = BigUint::from_bytes_be(constant.as_ref());
        let gk = self.g.modpow(&k, &self.n_squared);

        Ciphertext::new((c.value() * gk) % &self.n_squared)
    }

    /// Multiply an encrypted value by a plaintext constant. The result
    /// decrypts to `(m · k) mod n`.
    ///
    /// c' = cᵏ mod n²
    pub fn mul_constant<K: AsRef<[u8]>>(&self, c: &Ciphertext, constant: K) -> Ciphertext {
        let k = BigUint::from_bytes_be(constant.as_ref());

        Ciphertext::new(c.value().modpow(&k, &self.n_squared))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::OnceLock;

    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use super::*;
    use crate::decrypt::Decrypt;
    use crate::encrypt::Encrypt;
    use crate::key::KeyPair;

    static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

    fn shared_keypair() -> &'static KeyPair {
        KEYPAIR.get_or_init(|| KeyPair::generate_with_size(256).unwrap())
    }

    fn decrypt_to_uint(keypair: &KeyPair, c: &Ciphertext) -> BigUint {
        BigUint::from_bytes_be(&keypair.decrypt(c).unwrap())
    }

    #[test]
    fn adding_two_ciphertexts() {
        let keypair = shared_keypair();
        let public = keypair.public_key();

        let c1 = public.encrypt([15u8]).unwrap();
        let c2 = public.encrypt([20u8]).unwrap();
        let sum = public.add_ciphertexts(&c1, &c2);

        assert_eq!(keypair.decrypt(&sum).unwrap(), [35u8]);
    }

    #[test]
    fn addition_chains_across_several_ciphertexts() {
        let keypair = shared_keypair();
        let public = keypair.public_key();

        let c1 = public.encrypt([10u8]).unwrap();
        let c2 = public.encrypt([20u8]).unwrap();
        let c3 = public.encrypt([30u8]).unwrap();

        let sum = public.add_ciphertexts(&public.add_ciphertexts(&c1, &c2), &c3);

        assert_eq!(keypair.decrypt(&sum).unwrap(), [60u8]);
    }

    #[test]
    fn addition_wraps_at_the_modulus() {
        let keypair = shared_keypair();
        let public = keypair.public_key();

        let almost_n = public.n() - BigUint::one();
        let c1 = public.encrypt(almost_n.to_bytes_be()).unwrap();
        let c2 = public.encrypt([5u8]).unwrap();
        let sum = public.add_ciphertexts(&c1, &c2);

        // (n - 1) + 5 ≡ 4 (mod n)
        assert_eq!(decrypt_to_uint(keypair, &sum), BigUint::from(4u32));
    }

    #[test]
    fn adding_a_constant() {
        let keypair = shared_keypair();
        let public = keypair.public_key();

        let c = public.encrypt([15u8]).unwrap();
        let shifted = public.add_constant(&c, [20u8]);

        assert_eq!(keypair.decrypt(&shifted).unwrap(), [35u8]);
    }

    #[test]
    fn adding_the_zero_constant_is_identity_on_the_plaintext() {
        let keypair = shared_keypair();
        let public = keypair.public_key();

        let c = public.encrypt([15u8]).unwrap();
        let shifted = public.add_constant(&c, []);

        assert_eq!(keypair.decrypt(&shifted).unwrap(), [15u8]);
    }

    #[test]
    fn multiplying_by_a_constant() {
        let keypair = shared_keypair();
        let public = keypair.public_key();

        let c = public.encrypt([15u8]).unwrap();
        let scaled = public.mul_constant(&c, [3u8]);

        assert_eq!(keypair.decrypt(&scaled).unwrap(), [45u8]);
    }

    #[test]
    fn multiplying_by_zero_gives_an_encryption_of_zero() {
        let keypair = shared_keypair();
        let public = keypair.public_key();

        let c = public.encrypt([15u8]).unwrap();
        let zeroed = public.mul_constant(&c, []);

        assert!(decrypt_to_uint(keypair, &zeroed).is_zero());
    }

    #[test]
    fn operations_compose() {
        let keypair = shared_keypair();
        let public = keypair.public_key();

        // (3 · 5 + 7) + 2 = 24
        let c = public.encrypt([3u8]).unwrap();
        let c = public.mul_constant(&c, [5u8]);
        let c = public.add_constant(&c, [7u8]);
        let c = public.add_ciphertexts(&c, &public.encrypt([2u8]).unwrap());

        assert_eq!(keypair.decrypt(&c).unwrap(), [24u8]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn ciphertext_addition_matches_plaintext_addition(a: u64, b: u64) {
            let keypair = shared_keypair();
            let public = keypair.public_key();

            let ca = public.encrypt(a.to_be_bytes()).unwrap();
            let cb = public.encrypt(b.to_be_bytes()).unwrap();
            let sum = public.add_ciphertexts(&ca, &cb);

            let expected = (BigUint::from(a) + BigUint::from(b)) % public.n();
            prop_assert_eq!(decrypt_to_uint(keypair, &sum), expected);
        }

        #[test]
        fn constant_addition_matches_plaintext_addition(a: u64, k: u64) {
            let keypair = shared_keypair();
            let public = keypair.public_key();

            let c = public.encrypt(a.to_be_bytes()).unwrap();
            let shifted = public.add_constant(&c, k.to_be_bytes());

            let expected = (BigUint::from(a) + BigUint::from(k)) % public.n();
            prop_assert_eq!(decrypt_to_uint(keypair, &shifted), expected);
        }

        #[test]
        fn constant_multiplication_matches_plaintext_multiplication(a: u64, k: u64) {
            let keypair = shared_keypair();
            let public = keypair.public_key();

            let c = public.encrypt(a.to_be_bytes()).unwrap();
            let scaled = public.mul_constant(&c, k.to_be_bytes());

            let expected = (BigUint::from(a) * BigUint::from(k)) % public.n();
            prop_assert_eq!(decrypt_to_uint(keypair, &scaled), expected);
        }
    }
}
