// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `rsabench validate` command - Validate configuration file.

use rsabench_core::ConfigLoader;

pub fn execute(file: &str) -> anyhow::Result<()> {
    tracing::info!(file = %file, "Validating configuration");

    match ConfigLoader::load_file(file) {
        Ok(config) => {
            let settings = &config.benchmark;
            println!("✓ Configuration is valid");
            println!();
            println!("Benchmark Settings:");
            println!("  Iterations:        {}", settings.iterations);
            println!(
                "  Key Sizes:         {}",
                join(settings.key_sizes.iter().map(|k| k.to_string()))
            );
            println!(
                "  Datasets:          {}",
                join(settings.datasets.iter().map(|d| d.to_string()))
            );
            println!(
                "  Variants:          {}",
                join(settings.variants.iter().map(|v| v.label().to_string()))
            );
            for (size, primes) in &settings.multi_prime_primes {
                println!("  Multi-Prime {:>5}:  {} primes", size.bits(), primes);
            }
            println!();
            println!("Paths:");
            println!("  Key Directory:     {}", config.paths.key_dir.display());
            println!("  Dataset Directory: {}", config.paths.dataset_dir.display());
            println!("  Output:            {}", config.paths.output.display());
            println!();
            println!("Configurations: {}", settings.matrix_len());
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}
