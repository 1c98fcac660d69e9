// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for the RSA benchmark harness.
//!
//! This module defines explicit enum error types as per coding guidelines.
//! No `Box<dyn Error>`, no `anyhow::Result` - all errors are strongly typed.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for configuration and setup failures.
#[derive(Debug, Error)]
pub enum BenchError {
    // =========================================================================
    // Configuration Errors - Fail-Fast on Invalid Config
    // =========================================================================
    #[error("Hard validation error: {0}")]
    HardValidation(#[from] HardValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Key Material Errors - Fatal to one configuration, never retried
    // =========================================================================
    #[error("Failed to load key {path}: {reason}")]
    KeyLoad { path: PathBuf, reason: String },

    #[error("Key generation failed: {reason}")]
    KeyGeneration { reason: String },

    // =========================================================================
    // Dataset Errors
    // =========================================================================
    #[error("Dataset directory not found: {path}")]
    DatasetNotFound { path: PathBuf },

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Hard validation errors reject a configuration before any trial runs.
#[derive(Debug, Error)]
pub enum HardValidationError {
    #[error("Missing required field: {field} in {context}")]
    MissingRequiredField {
        field: &'static str,
        context: String,
    },

    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Schema validation failed: {message}")]
    SchemaValidation { message: String },
}

/// Per-message cryptographic failures.
///
/// These are recovered by the batch runners: the offending message or
/// ciphertext is dropped from its batch and processing continues.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Encryption failed for {len}-byte message: {source}")]
    Encrypt {
        len: usize,
        #[source]
        source: rsa::Error,
    },

    #[error("Decryption failed for {len}-byte ciphertext: {source}")]
    Decrypt {
        len: usize,
        #[source]
        source: rsa::Error,
    },
}

/// Result type alias using BenchError.
pub type BenchResult<T> = Result<T, BenchError>;
