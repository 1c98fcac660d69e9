// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! RSA Benchmark Core Library
//!
//! Validated types, configuration parsing, the OAEP-SHA256 primitive,
//! key and dataset loading, plus the one-shot key and dataset setup
//! utilities used by the benchmark harness.

pub mod cipher;
pub mod config;
pub mod datagen;
pub mod dataset;
pub mod error;
pub mod keygen;
pub mod keys;
pub mod types;

// Re-export commonly used types
pub use cipher::{KeyPair, PaddingScheme};
pub use config::{BenchmarkSettings, Config, ConfigLoader, PathsConfig};
pub use dataset::{DatasetDir, MessageSource};
pub use error::{BenchError, BenchResult, CryptoError, HardValidationError};
pub use keys::{KeySource, KeySpec, KeyStore};
pub use types::{Ciphertext, DatasetCategory, KeySize, Message, PrimeCount, RsaVariant};
