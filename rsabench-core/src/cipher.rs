// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! The encrypt/decrypt primitive measured by the harness.
//!
//! OAEP itself comes from the `rsa` crate; this module only fixes the
//! padding configuration and turns per-message failures into
//! [`CryptoError`] values the batch runners can skip.

use rand::rngs::OsRng;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::error::CryptoError;
use crate::types::{Ciphertext, Message};

/// Padding applied to every encrypt/decrypt call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingScheme {
    /// OAEP with SHA-256 as both digest and MGF1 hash, no label.
    #[default]
    OaepSha256,
}

impl PaddingScheme {
    fn oaep(&self) -> Oaep {
        match self {
            PaddingScheme::OaepSha256 => Oaep::new::<Sha256>(),
        }
    }
}

/// A loaded private/public key pair, held read-only for a configuration's trials.
#[derive(Debug, Clone)]
pub struct KeyPair {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl KeyPair {
    pub fn new(private: RsaPrivateKey, public: RsaPublicKey) -> Self {
        Self { private, public }
    }

    /// Derive the public half from a private key.
    pub fn from_private(private: RsaPrivateKey) -> Self {
        let public = RsaPublicKey::from(&private);
        Self { private, public }
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }
}

/// Encrypt one message.
pub fn encrypt(
    key: &RsaPublicKey,
    message: &Message,
    padding: PaddingScheme,
) -> Result<Ciphertext, CryptoError> {
    key.encrypt(&mut OsRng, padding.oaep(), message.as_bytes())
        .map(Ciphertext::new)
        .map_err(|source| CryptoError::Encrypt {
            len: message.len(),
            source,
        })
}

/// Decrypt one ciphertext.
pub fn decrypt(
    key: &RsaPrivateKey,
    ciphertext: &Ciphertext,
    padding: PaddingScheme,
) -> Result<Message, CryptoError> {
    key.decrypt(padding.oaep(), ciphertext.as_bytes())
        .map(Message::new)
        .map_err(|source| CryptoError::Decrypt {
            len: ciphertext.len(),
            source,
        })
}
