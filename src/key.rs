// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::{sampling, util, Decrypt, Encrypt};

/// Default modulus size for generated keys.
pub const DEFAULT_MODULUS_BITS: usize = 2048;

/// Smallest accepted modulus size.
///
/// The bit length must be even so both prime factors come out at exactly
/// half of it, and at least 8 so two distinct primes of that half-size
/// exist. Anything below 2048 bits is for tests and experiments only.
pub const MIN_MODULUS_BITS: usize = 8;

/// Public parameters of the cryptosystem.
///
/// The modulus is `n = pq` for two distinct primes of equal bit length.
/// The generator is fixed to `g = n + 1` and `n²` is cached since every
/// ciphertext operation reduces by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) g: BigUint,
    pub(crate) n_squared: BigUint,
}

impl PublicKey {
    /// Derive the full public key from the modulus.
    pub(crate) fn from_modulus(n: BigUint) -> Self {
        let g = &n + BigUint::one();
        let n_squared = &n * &n;
        Self { n, g, n_squared }
    }

    /// Return the public modulus `n`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Return the generator `g = n + 1`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Return `n²`, the modulus of the ciphertext space.
    pub fn n_squared(&self) -> &BigUint {
        &self.n_squared
    }

    /// Return the bit length of the modulus.
    pub fn bit_length(&self) -> usize {
        self.n.bits()
    }
}

/// Secret key material.
///
/// Contains the factorization of the public modulus and the constants for
/// CRT-based decryption, all derived once at construction. Sensitive fields
/// are zeroized on drop; `num-bigint-dig` implements `Zeroize` for
/// `BigUint`, which wipes the underlying heap-allocated digit vectors.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    #[zeroize(skip)]
    pub(crate) public_key: PublicKey,

    /// Prime factor p.
    pub(crate) p: BigUint,
    pub(crate) p_squared: BigUint,
    pub(crate) p_minus_one: BigUint,

    /// Prime factor q.
    pub(crate) q: BigUint,
    pub(crate) q_squared: BigUint,
    pub(crate) q_minus_one: BigUint,

    /// p⁻¹ mod q, for the CRT recombination.
    pub(crate) p_inv_q: BigUint,

    /// L((1 - n) mod p², p)⁻¹ mod p.
    pub(crate) hp: BigUint,

    /// L((1 - n) mod q², q)⁻¹ mod q.
    pub(crate) hq: BigUint,
}

impl PrivateKey {
    /// Construct a private key, and its embedded public key, from the two
    /// prime factors of the modulus.
    ///
    /// The factors must be distinct primes of at least 2. Primality itself
    /// is not verified; composite inputs produce a key that mangles some
    /// plaintexts without any error.
    pub fn from_primes(p: BigUint, q: BigUint) -> Result<Self> {
        if p.is_zero() || p.is_one() || q.is_zero() || q.is_one() {
            return Err(Error::KeyGenerationFailed(
                "Prime factors must be at least 2".into(),
            ));
        }
        if p == q {
            return Err(Error::KeyGenerationFailed("Primes must be distinct".into()));
        }

        let public_key = PublicKey::from_modulus(&p * &q);

        let p_squared = &p * &p;
        let p_minus_one = &p - BigUint::one();
        let q_squared = &q * &q;
        let q_minus_one = &q - BigUint::one();

        let p_inv_q = util::mod_inverse(&p, &q)?;
        let hp = util::h_constant(&p, &p_squared, &public_key.n)?;
        let hq = util::h_constant(&q, &q_squared, &public_key.n)?;

        Ok(Self {
            public_key,
            p,
            p_squared,
            p_minus_one,
            q,
            q_squared,
            q_minus_one,
            p_inv_q,
            hp,
            hq,
        })
    }

    /// Return a reference to the associated public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

/// A complete key pair consisting of public and private components.
///
/// Secret material is zeroized when dropped.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    #[zeroize(skip)]
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair with default parameters (2048-bit modulus).
    pub fn generate() -> Result<Self> {
        KeyPairBuilder::new().build()
    }

    /// Generate a key pair with a custom modulus size.
    pub fn generate_with_size(bit_length: usize) -> Result<Self> {
        KeyPairBuilder::new().bit_length(bit_length).build()
    }

    /// Return the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}

impl Encrypt for KeyPair {
    fn encrypt<P: AsRef<[u8]>>(&self, plaintext: P) -> Result<Ciphertext> {
        self.public.encrypt(plaintext)
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
        self.secret.decrypt(ciphertext)
    }
}

/// Builder for generating key pairs with configurable parameters.
#[derive(Debug)]
pub struct KeyPairBuilder {
    bit_length: usize,
}

impl KeyPairBuilder {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self {
            bit_length: DEFAULT_MODULUS_BITS,
        }
    }

    /// Set the desired modulus bit length.
    pub fn bit_length(mut self, bits: usize) -> Self {
        self.bit_length = bits;
        self
    }

    /// Generate the key pair.
    ///
    /// The two prime searches run in parallel, each on its own draw from
    /// the operating-system entropy source. When both searches fail, the
    /// first one's error is reported.
    pub fn build(self) -> Result<KeyPair> {
        if self.bit_length < MIN_MODULUS_BITS || self.bit_length % 2 != 0 {
            return Err(Error::InvalidKeySize {
                min: MIN_MODULUS_BITS,
                actual: self.bit_length,
            });
        }

        let prime_bits = self.bit_length / 2;

        let (p_result, q_result) = rayon::join(
            || {
                let mut rng = OsRng;
                sampling::gen_prime(prime_bits, &mut rng)
            },
            || {
                let mut rng = OsRng;
                sampling::gen_prime(prime_bits, &mut rng)
            },
        );

        let p = p_result?;
        let mut q = q_result?;

        // Equal primes would put the key's security on a single factor and
        // break the CRT constants. Only realistically hit at toy sizes,
        // where the prime pool for the half-width is small.
        while q == p {
            q = sampling::gen_prime(prime_bits, &mut OsRng)?;
        }

        let secret = PrivateKey::from_primes(p, q)?;
        let public = secret.public_key().clone();

        Ok(KeyPair { public, secret })
    }
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}
