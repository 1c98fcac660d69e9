// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `rsabench datagen` command - Generate the message dataset.

use std::path::PathBuf;

use anyhow::bail;
use rsabench_core::datagen::generate_dataset;

use super::load_config;

pub fn execute(config_path: &str, dataset_dir: Option<PathBuf>, count: usize) -> anyhow::Result<()> {
    if count == 0 {
        bail!("--count must be at least 1");
    }

    let config = load_config(config_path)?;
    let dataset_dir = dataset_dir.unwrap_or(config.paths.dataset_dir);

    let summary = generate_dataset(&dataset_dir, count, &mut rand::thread_rng())?;

    println!("Dataset written to {}", dataset_dir.display());
    println!("  random_data:     {}", summary.random);
    println!("  structured_data: {}", summary.structured);
    println!("  text_data:       {}", summary.text);

    Ok(())
}
