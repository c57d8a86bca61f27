// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Paillier Cryptosystem
//!
//! Probabilistic public-key encryption with additive homomorphism, based on
//! the decisional composite residuosity assumption for n = pq.
//!
//! Reference: [Paillier (1999), EUROCRYPT](https://link.springer.com/chapter/10.1007/3-540-48910-X_16)
//!
//! Plaintexts enter and leave the API as big-endian byte strings and are
//! treated as integers below the modulus `n`. Ciphertexts live below `n²`
//! and support three operations without the private key: adding two
//! ciphertexts, adding a plaintext constant and multiplying by a plaintext
//! constant.
//!
//! ## Security
//!
//! Encryption is randomized, so two encryptions of one message differ.
//! There is no ciphertext integrity: every value below n² decrypts to
//! something, and a forged or tampered ciphertext yields garbage rather
//! than an error. None of the arithmetic is constant-time. The private key
//! and its precomputed decryption constants are zeroized on drop via the
//! `zeroize` crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use paillier::{Decrypt, Encrypt, KeyPair};
//!
//! let keypair = KeyPair::generate().expect("key generation failed");
//! let public = keypair.public_key();
//!
//! let c1 = public.encrypt([15u8]).expect("encryption failed");
//! let c2 = public.encrypt([20u8]).expect("encryption failed");
//! let sum = public.add_ciphertexts(&c1, &c2);
//!
//! let decrypted = keypair.decrypt(&sum).expect("decryption failed");
//! assert_eq!(decrypted, [35u8]);
//! ```

mod ciphertext;
mod decrypt;
mod encrypt;
mod error;
mod homomorphic;
mod key;
mod sampling;
mod util;

pub use ciphertext::*;
pub use decrypt::*;
pub use encrypt::*;
pub use error::*;
pub use key::*;
