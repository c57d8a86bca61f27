#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use paillier::{Decrypt, Encrypt, KeyPair};
use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(512).unwrap());
    let n = keypair.public_key().n();

    // Limit input to modulus size
    let modulus_len = n.to_bytes_be().len();
    let truncated = if data.len() > modulus_len {
        &data[..modulus_len]
    } else {
        data
    };

    let mut plaintext = BigUint::from_bytes_be(truncated);

    // Ensure plaintext < n
    plaintext %= n;

    let Ok(ciphertext) = keypair.encrypt(plaintext.to_bytes_be()) else {
        return;
    };
    let Ok(decrypted) = keypair.decrypt(&ciphertext) else {
        return;
    };

    assert_eq!(plaintext, BigUint::from_bytes_be(&decrypted));
});
