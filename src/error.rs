// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors that can occur during cryptographic operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid key size: must be an even bit length of at least {min}, got {actual}")]
    InvalidKeySize { min: usize, actual: usize },

    #[error("Message too long for this public key size")]
    MessageTooLarge,

    #[error("Random source failure")]
    RandomSource(#[source] rand::Error),

    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
