// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::{BigUint, ModInverse};
use num_traits::{CheckedSub, One, Zero};

use crate::error::{Error, Result};

/// L(u) = (u - 1) / x
///
/// This function appears in the decryption algorithm and in the derivation
/// of the decryption constants. The division is exact because u ≡ 1 (mod x)
/// for every value the scheme computes here. A forged ciphertext can break
/// that premise and even drive u to zero, so the subtraction saturates; the
/// quotient is garbage in that case but stays defined.
#[inline]
pub fn l_function(u: &BigUint, x: &BigUint) -> BigUint {
    match u.checked_sub(&BigUint::one()) {
        Some(d) => d / x,
        None => BigUint::zero(),
    }
}

/// H(x) = L((1 - n) mod x², x)⁻¹ mod x
///
/// Per-prime decryption constant, precomputed once at key derivation.
/// x divides n, so the residue (1 - n) mod x² is never zero; it is computed
/// as x² - ((n - 1) mod x²) to stay in unsigned arithmetic.
pub fn h_constant(x: &BigUint, x_squared: &BigUint, n: &BigUint) -> Result<BigUint> {
    let g = x_squared - ((n - BigUint::one()) % x_squared);
    let l = l_function(&g, x);
    mod_inverse(&l, x)
}

/// Computes a⁻¹ mod m, failing when the inverse does not exist.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    a.mod_inverse(m)
        .ok_or_else(|| Error::KeyGenerationFailed("Modular inverse does not exist".into()))?
        .to_biguint()
        .ok_or_else(|| Error::KeyGenerationFailed("Modular inverse is not canonical".into()))
}

/// Minimal big-endian encoding of `v`. Zero encodes as the empty string, so
/// a plaintext of all zero bytes comes back empty after a round trip.
pub fn to_bytes_minimal(v: &BigUint) -> Vec<u8> {
    if v.is_zero() {
        return Vec::new();
    }
    v.to_bytes_be()
}
