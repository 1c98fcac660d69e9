// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! One-shot key material setup.
//!
//! Writes a key pair for every (variant, key size) of the matrix in the
//! layout [`KeyStore`](crate::keys::KeyStore) reads. Multi-prime entries
//! hold two-prime keys: PKCS#8 encoders refuse keys with more than two
//! primes, so the prime count only appears in the file name.

use std::path::{Path, PathBuf};

use rand::rngs::OsRng;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};

use crate::config::BenchmarkSettings;
use crate::error::{BenchError, BenchResult};
use crate::keys::KeySpec;
use crate::types::{KeySize, RsaVariant};

/// Public exponent used for every generated key.
const PUBLIC_EXPONENT: u64 = 65537;

/// Generate one fresh private key of the given size.
pub fn generate_private_key(key_size: KeySize) -> BenchResult<RsaPrivateKey> {
    RsaPrivateKey::new_with_exp(
        &mut OsRng,
        key_size.bits() as usize,
        &BigUint::from(PUBLIC_EXPONENT),
    )
    .map_err(|e| BenchError::KeyGeneration {
        reason: e.to_string(),
    })
}

/// Generate and persist the key set for every variant and key size.
///
/// Existing files are overwritten. Returns the private key paths written.
pub fn generate_key_set(root: &Path, settings: &BenchmarkSettings) -> BenchResult<Vec<PathBuf>> {
    let mut written = Vec::new();

    for &variant in &settings.variants {
        for &key_size in &settings.key_sizes {
            let primes = match variant {
                RsaVariant::MultiPrime => settings.primes_for(key_size),
                _ => None,
            };
            let spec = KeySpec::new(variant, key_size, primes);

            tracing::info!(variant = %variant, key_size = %key_size, "Generating key pair");
            let private = generate_private_key(key_size)?;
            let public = RsaPublicKey::from(&private);

            written.push(write_pair(root, &spec, &private, &public)?);
        }
    }

    Ok(written)
}

fn write_pair(
    root: &Path,
    spec: &KeySpec,
    private: &RsaPrivateKey,
    public: &RsaPublicKey,
) -> BenchResult<PathBuf> {
    let private_path = spec.private_path(root)?;
    let public_path = spec.public_path(root)?;

    if let Some(parent) = private_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BenchError::Io {
            context: "creating key directory",
            source: e,
        })?;
    }

    let private_pem = private
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| BenchError::KeyGeneration {
            reason: format!("PKCS#8 encoding failed: {}", e),
        })?;
    let public_pem =
        public
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| BenchError::KeyGeneration {
                reason: format!("SPKI encoding failed: {}", e),
            })?;

    std::fs::write(&private_path, private_pem.as_bytes()).map_err(|e| BenchError::Io {
        context: "writing private key",
        source: e,
    })?;
    std::fs::write(&public_path, public_pem).map_err(|e| BenchError::Io {
        context: "writing public key",
        source: e,
    })?;

    tracing::debug!(path = %private_path.display(), "Wrote key pair");
    Ok(private_path)
}
