// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI command modules.

use std::path::Path;

use rsabench_core::{BenchResult, Config, ConfigLoader};

pub mod datagen;
pub mod keygen;
pub mod run;
pub mod validate;

/// Load the configuration file, or the built-in matrix when it does not exist.
pub fn load_config(path: &str) -> BenchResult<Config> {
    if Path::new(path).exists() {
        ConfigLoader::load_file(path)
    } else {
        tracing::info!(config = %path, "Configuration file not found, using defaults");
        ConfigLoader::defaults()
    }
}
