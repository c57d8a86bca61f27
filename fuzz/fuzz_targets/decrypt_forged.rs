#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use paillier::{Ciphertext, Decrypt, KeyPair};
use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

// Arbitrary bytes interpreted as a ciphertext must either be rejected for
// being out of range or decrypt to a value below n. No input may panic.
fuzz_target!(|data: &[u8]| {
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(512).unwrap());

    let forged = Ciphertext::from_bytes(data);
    match keypair.decrypt(&forged) {
        Ok(plaintext) => {
            let m = BigUint::from_bytes_be(&plaintext);
            assert!(&m < keypair.public_key().n());
        }
        Err(_) => {
            assert!(forged.value() >= keypair.public_key().n_squared());
        }
    }
});
