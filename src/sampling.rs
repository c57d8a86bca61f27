// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random prime and residue sampling.
//!
//! Every draw goes through [`RngCore::try_fill_bytes`], so a broken or
//! exhausted entropy source surfaces as [`Error::RandomSource`] instead of
//! panicking in the middle of key generation.

use num_bigint_dig::BigUint;
use num_bigint_dig::prime::probably_prime;
use num_traits::{One, Zero};
use rand::RngCore;

use crate::error::{Error, Result};

/// Small primes for fast sieving (first 256 odd primes, up to 1619).
const SIEVE_PRIMES: &[u32] = &[
    3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421,
    431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541, 547,
    557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787, 797,
    809, 811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911, 919, 929,
    937, 941, 947, 953, 967, 971, 977, 983, 991, 997, 1009, 1013, 1019, 1021, 1031, 1033, 1039,
    1049, 1051, 1061, 1063, 1069, 1087, 1091, 1093, 1097, 1103, 1109, 1117, 1123, 1129, 1151, 1153,
    1163, 1171, 1181, 1187, 1193, 1201, 1213, 1217, 1223, 1229, 1231, 1237, 1249, 1259, 1277, 1279,
    1283, 1289, 1291, 1297, 1301, 1303, 1307, 1319, 1321, 1327, 1361, 1367, 1373, 1381, 1399, 1409,
    1423, 1427, 1429, 1433, 1439, 1447, 1451, 1453, 1459, 1471, 1481, 1483, 1487, 1489, 1493, 1499,
    1511, 1523, 1531, 1543, 1549, 1553, 1559, 1567, 1571, 1579, 1583, 1597, 1601, 1607, 1609, 1613,
    1619,
];

/// Below this candidate size the sieve is skipped: a tiny candidate may
/// itself be one of the sieve primes and must not be rejected for it.
const SIEVE_MIN_BITS: usize = 16;

/// Generates a probable prime with exactly `bits` bits.
///
/// Candidates get their top and bottom bits forced, a trial-division pass
/// against [`SIEVE_PRIMES`], and a Miller-Rabin test with the round count
/// from [`miller_rabin_rounds`]. Sampling repeats until a candidate passes.
pub(crate) fn gen_prime<R: RngCore + ?Sized>(bits: usize, rng: &mut R) -> Result<BigUint> {
    debug_assert!(bits >= 2, "prime candidates need at least 2 bits");
    let rounds = miller_rabin_rounds(bits);

    loop {
        let candidate = gen_candidate(bits, rng)?;

        if bits >= SIEVE_MIN_BITS && fails_sieve(&candidate) {
            continue;
        }
        if probably_prime(&candidate, rounds) {
            return Ok(candidate);
        }
    }
}

/// Draws a random odd integer with exactly `bits` bits.
fn gen_candidate<R: RngCore + ?Sized>(bits: usize, rng: &mut R) -> Result<BigUint> {
    let nbytes = (bits + 7) / 8;
    let mut buf = vec![0u8; nbytes];
    rng.try_fill_bytes(&mut buf).map_err(Error::RandomSource)?;

    let mut candidate = BigUint::from_bytes_be(&buf) >> (nbytes * 8 - bits);

    // Set the top bit for the exact bit length, the bottom bit for oddness.
    candidate |= BigUint::one() << (bits - 1);
    candidate |= BigUint::one();

    Ok(candidate)
}

/// Draws a uniform value from `[0, bound)` by rejection sampling.
pub(crate) fn uniform_below<R: RngCore + ?Sized>(bound: &BigUint, rng: &mut R) -> Result<BigUint> {
    debug_assert!(!bound.is_zero(), "empty sampling range");

    let bits = bound.bits();
    let nbytes = (bits + 7) / 8;
    // Clearing the bits above the bound's most significant bit keeps the
    // acceptance rate above one half.
    let mask = 0xffu8 >> (nbytes * 8 - bits);

    let mut buf = vec![0u8; nbytes];
    loop {
        rng.try_fill_bytes(&mut buf).map_err(Error::RandomSource)?;
        buf[0] &= mask;

        let value = BigUint::from_bytes_be(&buf);
        if &value < bound {
            return Ok(value);
        }
    }
}

/// Quick compositeness check by trial division against the sieve table.
#[inline]
fn fails_sieve(candidate: &BigUint) -> bool {
    for &prime in SIEVE_PRIMES {
        if (candidate % prime).is_zero() {
            return true;
        }
    }
    false
}

/// Determines the optimal number of Miller-Rabin rounds based on bit length.
///
/// Based on FIPS 186-4 recommendations, fewer rounds are needed for larger
/// numbers to achieve the same security level (2⁻¹²⁸ error probability).
#[inline]
const fn miller_rabin_rounds(bits: usize) -> usize {
    match bits {
        0..=256 => 40,
        257..=512 => 15,
        513..=1024 => 10,
        1025..=2048 => 6,
        2049..=4096 => 4,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn primes_have_the_exact_bit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for bits in [16usize, 32, 64, 128] {
            let p = gen_prime(bits, &mut rng).unwrap();
            assert_eq!(p.bits(), bits);
            assert!(probably_prime(&p, 20));
        }
    }

    #[test]
    fn tiny_primes_are_reachable() {
        // 4-bit candidates with forced top and bottom bits can only be
        // 9, 11, 13 or 15; the two primes among them must both show up.
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let p = gen_prime(4, &mut rng).unwrap();
            assert!(probably_prime(&p, 20));
            seen.insert(p);
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn uniform_draws_stay_below_the_bound() {
        let mut rng = StdRng::seed_from_u64(3);
        let bound = BigUint::from(1000u32);
        for _ in 0..256 {
            assert!(uniform_below(&bound, &mut rng).unwrap() < bound);
        }
    }

    #[test]
    fn uniform_draw_from_one_is_zero() {
        let mut rng = StdRng::seed_from_u64(5);
        let bound = BigUint::one();
        assert!(uniform_below(&bound, &mut rng).unwrap().is_zero());
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let bound = BigUint::from(u64::MAX);
        let a = uniform_below(&bound, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = uniform_below(&bound, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sieve_rejects_small_factor_products() {
        // 3 · 5 · 7 · 11 · 13 = 15015
        assert!(fails_sieve(&BigUint::from(15015u32)));
        assert!(!fails_sieve(&BigUint::from(65537u32)));
    }

    struct ExhaustedEntropy;

    impl RngCore for ExhaustedEntropy {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new("entropy source exhausted"))
        }
    }

    #[test]
    fn entropy_failure_surfaces_as_an_error() {
        assert!(matches!(
            gen_prime(64, &mut ExhaustedEntropy),
            Err(Error::RandomSource(_))
        ));

        let bound = BigUint::from(1_000_000u32);
        assert!(matches!(
            uniform_below(&bound, &mut ExhaustedEntropy),
            Err(Error::RandomSource(_))
        ));
    }
}
