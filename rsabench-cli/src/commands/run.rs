// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `rsabench run` command - Run the experiment matrix.

use std::path::PathBuf;

use anyhow::{bail, Context};
use rsabench_benchmark::metrics::format_duration;
use rsabench_benchmark::{
    BenchmarkReport, ExperimentOrchestrator, JsonReporter, ResultsSink, SystemSampler,
};
use rsabench_core::config::MAX_ITERATIONS;
use rsabench_core::{DatasetDir, KeyStore};

use super::load_config;

pub fn execute(
    config_path: &str,
    iterations: Option<u32>,
    output: Option<PathBuf>,
    json_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;

    if let Some(n) = iterations {
        if n == 0 || n > MAX_ITERATIONS {
            bail!("--iterations must be between 1 and {}", MAX_ITERATIONS);
        }
        config.benchmark.iterations = n;
    }
    let output = output.unwrap_or(config.paths.output);

    println!("RSA Benchmark Suite");
    println!("===================");
    println!("Key directory:     {}", config.paths.key_dir.display());
    println!("Dataset directory: {}", config.paths.dataset_dir.display());
    println!("Iterations:        {}", config.benchmark.iterations);
    println!("Configurations:    {}", config.benchmark.matrix_len());
    println!();

    let mut orchestrator = ExperimentOrchestrator::new(
        config.benchmark,
        KeyStore::new(config.paths.key_dir),
        DatasetDir::new(config.paths.dataset_dir),
        SystemSampler::new(),
    );
    let summary = orchestrator.run();

    ResultsSink::write(&output, &summary.results)
        .with_context(|| format!("failed to write results to {}", output.display()))?;

    println!(
        "{:<16} {:>6}  {:<16} {:>12} {:>12}",
        "Variant", "Bits", "Dataset", "Encrypt", "Decrypt"
    );
    for result in &summary.results {
        println!(
            "{:<16} {:>6}  {:<16} {:>12} {:>12}",
            result.config.variant.label(),
            result.config.key_size.bits(),
            result.config.dataset.as_str(),
            format_duration(result.mean_encryption_time),
            format_duration(result.mean_decryption_time),
        );
    }
    println!();

    if !summary.failures.is_empty() {
        println!("Skipped configurations ({}):", summary.failures.len());
        for failure in &summary.failures {
            println!("  ✗ {}: {}", failure.config, failure.reason);
        }
        println!();
    }

    println!("Results written to: {}", output.display());

    if let Some(dir) = json_dir {
        let reporter = JsonReporter::new(&dir)?;
        let path = reporter.save(&BenchmarkReport::new(summary.results, summary.failures))?;
        println!("JSON report saved to: {}", path.display());
    }

    Ok(())
}
