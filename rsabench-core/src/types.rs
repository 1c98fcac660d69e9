// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated inputs.
//!
//! Following the "Newtype" pattern in Rust to ensure valid state by construction.
//! All types validate their invariants at creation time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HardValidationError;

/// Smallest modulus accepted by the harness.
const MIN_KEY_BITS: u32 = 1024;
/// Largest modulus accepted by the harness.
const MAX_KEY_BITS: u32 = 16384;
/// SHA-256 output length in bytes.
const SHA256_LEN: usize = 32;
/// Maximum number of primes in a multi-prime modulus.
const MAX_PRIMES: u8 = 16;

/// Validated RSA modulus size in bits.
/// Must be between 1024 and 16384 and byte aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct KeySize(u32);

impl KeySize {
    /// Create a new KeySize with bounds validation.
    pub fn new(bits: u32) -> Result<Self, HardValidationError> {
        if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) {
            return Err(HardValidationError::InvalidFieldValue {
                field: "key_size",
                value: bits.to_string(),
                reason: format!("Must be between {} and {} bits", MIN_KEY_BITS, MAX_KEY_BITS),
            });
        }
        if bits % 8 != 0 {
            return Err(HardValidationError::InvalidFieldValue {
                field: "key_size",
                value: bits.to_string(),
                reason: "Must be a multiple of 8".to_string(),
            });
        }
        Ok(Self(bits))
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Modulus size in bytes.
    pub fn bytes(&self) -> usize {
        (self.0 / 8) as usize
    }

    /// Largest plaintext that OAEP-SHA256 can carry under this modulus.
    pub fn max_oaep_plaintext(&self) -> usize {
        self.bytes() - 2 * SHA256_LEN - 2
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for KeySize {
    type Error = HardValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<KeySize> for u32 {
    fn from(size: KeySize) -> Self {
        size.0
    }
}

/// Validated dataset category, used as a file-name prefix.
/// Must be non-empty, alphanumeric with hyphens/underscores, max 64 chars.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DatasetCategory(String);

impl DatasetCategory {
    /// Create a new DatasetCategory with validation.
    pub fn new(prefix: impl Into<String>) -> Result<Self, HardValidationError> {
        let prefix = prefix.into();

        if prefix.is_empty() {
            return Err(HardValidationError::InvalidFieldValue {
                field: "dataset",
                value: prefix,
                reason: "Dataset category cannot be empty".to_string(),
            });
        }

        if prefix.len() > 64 {
            return Err(HardValidationError::InvalidFieldValue {
                field: "dataset",
                value: prefix.clone(),
                reason: format!("Dataset category too long: {} chars (max 64)", prefix.len()),
            });
        }

        if !prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(HardValidationError::InvalidFieldValue {
                field: "dataset",
                value: prefix,
                reason: "Dataset category must contain only alphanumeric characters, hyphens, and underscores".to_string(),
            });
        }

        Ok(Self(prefix))
    }

    /// Get the inner prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a dataset file name belongs to this category.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.0)
    }
}

impl fmt::Display for DatasetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for DatasetCategory {
    type Error = HardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DatasetCategory> for String {
    fn from(category: DatasetCategory) -> Self {
        category.0
    }
}

/// Validated number of primes in a multi-prime modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PrimeCount(u8);

impl PrimeCount {
    /// Create a new PrimeCount with validation.
    pub fn new(count: u8) -> Result<Self, HardValidationError> {
        if !(2..=MAX_PRIMES).contains(&count) {
            return Err(HardValidationError::InvalidFieldValue {
                field: "multi_prime_primes",
                value: count.to_string(),
                reason: format!("Prime count must be between 2 and {}", MAX_PRIMES),
            });
        }
        Ok(Self(count))
    }

    /// Get the inner count.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PrimeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for PrimeCount {
    type Error = HardValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PrimeCount> for u8 {
    fn from(count: PrimeCount) -> Self {
        count.0
    }
}

/// RSA variants compared by the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsaVariant {
    /// Two-prime RSA, whole-batch timing
    Standard,
    /// Multi-prime RSA, whole-batch timing
    MultiPrime,
    /// RSA-AEP, per-message timing
    Aep,
}

impl RsaVariant {
    /// All variants in canonical output order.
    pub const ALL: [RsaVariant; 3] = [RsaVariant::Standard, RsaVariant::MultiPrime, RsaVariant::Aep];

    /// Label written to the `RSA Variant` column of the results table.
    pub fn label(&self) -> &'static str {
        match self {
            RsaVariant::Standard => "Standard RSA",
            RsaVariant::MultiPrime => "Multi-Prime RSA",
            RsaVariant::Aep => "RSA-AEP",
        }
    }
}

impl fmt::Display for RsaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A plaintext read from a dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(Vec<u8>);

impl Message {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// An OAEP ciphertext produced during the encryption phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
