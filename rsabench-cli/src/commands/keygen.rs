// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `rsabench keygen` command - Generate key material.

use std::path::PathBuf;

use rsabench_core::keygen::generate_key_set;

use super::load_config;

pub fn execute(config_path: &str, key_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let key_dir = key_dir.unwrap_or(config.paths.key_dir);

    println!("Generating keys into {}", key_dir.display());
    let written = generate_key_set(&key_dir, &config.benchmark)?;

    for path in &written {
        println!("  ✓ {}", path.display());
    }
    println!();
    println!("{} key pairs written", written.len());

    Ok(())
}
