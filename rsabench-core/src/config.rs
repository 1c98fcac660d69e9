// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML configuration parser with strict schema validation.
//!
//! Describes the experiment matrix (variants, key sizes, dataset categories)
//! and where key material, datasets and results live. Every field has a
//! default, so an empty document reproduces the reference matrix.
//! Any invalid field results in a HardValidationError before a trial runs.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BenchError, BenchResult, HardValidationError};
use crate::types::{DatasetCategory, KeySize, PrimeCount, RsaVariant};

/// Upper bound on trials per configuration.
pub const MAX_ITERATIONS: u32 = 10_000;

/// Raw benchmark matrix as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
struct RawBenchmarkConfig {
    #[serde(default = "default_iterations")]
    iterations: u32,
    #[serde(default = "default_key_sizes")]
    key_sizes: Vec<u32>,
    #[serde(default = "default_datasets")]
    datasets: Vec<String>,
    #[serde(default = "default_variants")]
    variants: Vec<RsaVariant>,
    #[serde(default = "default_multi_prime_primes")]
    multi_prime_primes: BTreeMap<u32, u8>,
}

fn default_iterations() -> u32 {
    10
}

fn default_key_sizes() -> Vec<u32> {
    vec![2048, 3072, 4096]
}

fn default_datasets() -> Vec<String> {
    vec![
        "random_data".to_string(),
        "structured_data".to_string(),
        "text_data".to_string(),
    ]
}

fn default_variants() -> Vec<RsaVariant> {
    RsaVariant::ALL.to_vec()
}

fn default_multi_prime_primes() -> BTreeMap<u32, u8> {
    BTreeMap::from([(2048, 3), (3072, 4), (4096, 5)])
}

impl Default for RawBenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            key_sizes: default_key_sizes(),
            datasets: default_datasets(),
            variants: default_variants(),
            multi_prime_primes: default_multi_prime_primes(),
        }
    }
}

/// Raw filesystem layout.
#[derive(Debug, Deserialize)]
struct RawPathsConfig {
    #[serde(default = "default_key_dir")]
    key_dir: String,
    #[serde(default = "default_dataset_dir")]
    dataset_dir: String,
    #[serde(default = "default_output")]
    output: String,
}

fn default_key_dir() -> String {
    "key".to_string()
}

fn default_dataset_dir() -> String {
    "dataset".to_string()
}

fn default_output() -> String {
    "results.txt".to_string()
}

impl Default for RawPathsConfig {
    fn default() -> Self {
        Self {
            key_dir: default_key_dir(),
            dataset_dir: default_dataset_dir(),
            output: default_output(),
        }
    }
}

/// Raw root configuration file.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    benchmark: RawBenchmarkConfig,
    #[serde(default)]
    paths: RawPathsConfig,
}

/// Validated experiment matrix.
#[derive(Debug, Clone)]
pub struct BenchmarkSettings {
    pub iterations: u32,
    pub key_sizes: Vec<KeySize>,
    pub datasets: Vec<DatasetCategory>,
    pub variants: Vec<RsaVariant>,
    pub multi_prime_primes: BTreeMap<KeySize, PrimeCount>,
}

impl BenchmarkSettings {
    /// Prime count used by the multi-prime key files of this size.
    pub fn primes_for(&self, key_size: KeySize) -> Option<PrimeCount> {
        self.multi_prime_primes.get(&key_size).copied()
    }

    /// Number of configurations in the matrix.
    pub fn matrix_len(&self) -> usize {
        self.variants.len() * self.key_sizes.len() * self.datasets.len()
    }
}

/// Validated filesystem layout.
#[derive(Debug, Clone)]
pub struct PathsConfig {
    pub key_dir: PathBuf,
    pub dataset_dir: PathBuf,
    pub output: PathBuf,
}

/// Complete validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub benchmark: BenchmarkSettings,
    pub paths: PathsConfig,
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> BenchResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| BenchError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> BenchResult<Config> {
        if content.trim().is_empty() {
            return Self::defaults();
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| BenchError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    /// The reference matrix with default paths.
    pub fn defaults() -> BenchResult<Config> {
        Self::validate(RawConfig::default())
    }

    fn validate(raw: RawConfig) -> BenchResult<Config> {
        let benchmark = Self::validate_benchmark(raw.benchmark)?;
        let paths = Self::validate_paths(raw.paths)?;
        Ok(Config { benchmark, paths })
    }

    fn validate_benchmark(raw: RawBenchmarkConfig) -> BenchResult<BenchmarkSettings> {
        if raw.iterations == 0 || raw.iterations > MAX_ITERATIONS {
            return Err(HardValidationError::InvalidFieldValue {
                field: "iterations",
                value: raw.iterations.to_string(),
                reason: format!("Must be between 1 and {}", MAX_ITERATIONS),
            }
            .into());
        }

        if raw.key_sizes.is_empty() || raw.datasets.is_empty() || raw.variants.is_empty() {
            return Err(HardValidationError::SchemaValidation {
                message: "key_sizes, datasets and variants must each list at least one entry"
                    .to_string(),
            }
            .into());
        }

        let mut key_sizes = Vec::with_capacity(raw.key_sizes.len());
        let mut seen_sizes = HashSet::new();
        for bits in raw.key_sizes {
            let size = KeySize::new(bits)?;
            if !seen_sizes.insert(size) {
                return Err(duplicate("key_sizes", size.to_string()));
            }
            key_sizes.push(size);
        }

        let mut datasets = Vec::with_capacity(raw.datasets.len());
        let mut seen_datasets = HashSet::new();
        for prefix in raw.datasets {
            let category = DatasetCategory::new(prefix)?;
            if !seen_datasets.insert(category.clone()) {
                return Err(duplicate("datasets", category.to_string()));
            }
            datasets.push(category);
        }

        let mut seen_variants = HashSet::new();
        for variant in &raw.variants {
            if !seen_variants.insert(*variant) {
                return Err(duplicate("variants", variant.to_string()));
            }
        }

        let mut multi_prime_primes = BTreeMap::new();
        for (bits, count) in raw.multi_prime_primes {
            multi_prime_primes.insert(KeySize::new(bits)?, PrimeCount::new(count)?);
        }

        // Multi-prime key files are named by prime count, so every size needs one
        if raw.variants.contains(&RsaVariant::MultiPrime) {
            for size in &key_sizes {
                if !multi_prime_primes.contains_key(size) {
                    return Err(HardValidationError::MissingRequiredField {
                        field: "multi_prime_primes",
                        context: format!("key size {}", size),
                    }
                    .into());
                }
            }
        }

        Ok(BenchmarkSettings {
            iterations: raw.iterations,
            key_sizes,
            datasets,
            variants: raw.variants,
            multi_prime_primes,
        })
    }

    fn validate_paths(raw: RawPathsConfig) -> BenchResult<PathsConfig> {
        for (field, value) in [
            ("key_dir", &raw.key_dir),
            ("dataset_dir", &raw.dataset_dir),
            ("output", &raw.output),
        ] {
            if value.trim().is_empty() {
                return Err(HardValidationError::InvalidFieldValue {
                    field,
                    value: value.clone(),
                    reason: "Path cannot be empty".to_string(),
                }
                .into());
            }
        }

        Ok(PathsConfig {
            key_dir: PathBuf::from(raw.key_dir),
            dataset_dir: PathBuf::from(raw.dataset_dir),
            output: PathBuf::from(raw.output),
        })
    }
}

fn duplicate(field: &'static str, value: String) -> BenchError {
    HardValidationError::InvalidFieldValue {
        field,
        value,
        reason: "Duplicate entry".to_string(),
    }
    .into()
}
