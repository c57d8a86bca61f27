#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint_dig::BigUint;
use paillier::{Decrypt, Encrypt, KeyPair};

use std::sync::OnceLock;

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate_with_size(512).unwrap());
    let public = keypair.public_key();
    let n = public.n();

    let (m1_bytes, m2_bytes) = data.split_at(data.len() / 2);
    let mut m1 = BigUint::from_bytes_be(m1_bytes);
    let mut m2 = BigUint::from_bytes_be(m2_bytes);
    m1 %= n;
    m2 %= n;

    let Ok(c1) = public.encrypt(m1.to_bytes_be()) else {
        return;
    };
    let Ok(c2) = public.encrypt(m2.to_bytes_be()) else {
        return;
    };

    let sum = public.add_ciphertexts(&c1, &c2);
    let decrypted = BigUint::from_bytes_be(&keypair.decrypt(&sum).unwrap());

    assert_eq!(decrypted, (m1 + m2) % n);
});
