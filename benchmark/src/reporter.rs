// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Result persistence.
//!
//! [`ResultsSink`] writes the tab-delimited results table read by the
//! plotting scripts; its column names, order and number formatting are a
//! fixed contract. [`JsonReporter`] additionally saves a timestamped JSON
//! report with system information for archival.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::metrics::{AggregateResult, BenchmarkReport};

/// Column names of the results table, in order.
pub const TABLE_COLUMNS: [&str; 7] = [
    "RSA Variant",
    "Key Size",
    "Dataset Type",
    "Avg. Encryption Time",
    "Avg. Decryption Time",
    "Avg. Memory Usage",
    "Avg. CPU Usage",
];

/// Errors that can occur while writing results.
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Render the results table.
///
/// Times are seconds with 6 decimals, memory is integer bytes, CPU has 2 decimals.
pub fn render_table(results: &[AggregateResult]) -> String {
    let mut table = TABLE_COLUMNS.join("\t");
    table.push('\n');

    for result in results {
        table.push_str(&format!(
            "{}\t{}\t{}\t{:.6}\t{:.6}\t{}\t{:.2}\n",
            result.config.variant.label(),
            result.config.key_size,
            result.config.dataset,
            result.mean_encryption_time.as_secs_f64(),
            result.mean_decryption_time.as_secs_f64(),
            result.mean_memory_delta,
            result.mean_cpu_delta,
        ));
    }

    table
}

/// Writes the results table all-or-nothing.
pub struct ResultsSink;

impl ResultsSink {
    /// Write `results` to `path`.
    ///
    /// The table is staged in a temporary file next to `path` and renamed
    /// into place, so a failed write never leaves a partial table behind.
    pub fn write(path: impl AsRef<Path>, results: &[AggregateResult]) -> Result<(), ReporterError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut staged = NamedTempFile::new_in(&dir)?;
        staged.write_all(render_table(results).as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(path).map_err(|e| e.error)?;

        tracing::info!(path = %path.display(), rows = results.len(), "Results table written");
        Ok(())
    }
}

/// JSON reporter for benchmark runs.
pub struct JsonReporter {
    /// Output directory for report files
    output_dir: PathBuf,
}

impl JsonReporter {
    /// Create a new JSON reporter with the specified output directory.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, ReporterError> {
        let output_dir = output_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Save a benchmark report to a timestamped JSON file.
    ///
    /// Returns the path to the created file.
    pub fn save(&self, report: &BenchmarkReport) -> Result<PathBuf, ReporterError> {
        let timestamp = report.timestamp.format("%Y-%m-%dT%H-%M-%SZ");
        let filename = format!("rsabench_{}.json", timestamp);
        let filepath = self.output_dir.join(&filename);

        let file = File::create(&filepath)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.flush()?;

        Ok(filepath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ExperimentConfig;
    use rsabench_core::{DatasetCategory, KeySize, PrimeCount, RsaVariant};
    use std::time::Duration;
    use tempfile::TempDir;

    fn row(
        variant: RsaVariant,
        bits: u32,
        dataset: &str,
        enc: Duration,
        dec: Duration,
        memory: i64,
        cpu: f64,
    ) -> AggregateResult {
        AggregateResult {
            config: ExperimentConfig {
                variant,
                key_size: KeySize::new(bits).unwrap(),
                dataset: DatasetCategory::new(dataset).unwrap(),
                iterations: 10,
                primes: match variant {
                    RsaVariant::MultiPrime => Some(PrimeCount::new(3).unwrap()),
                    _ => None,
                },
            },
            mean_encryption_time: enc,
            mean_decryption_time: dec,
            mean_memory_delta: memory,
            mean_cpu_delta: cpu,
        }
    }

    fn canned() -> Vec<AggregateResult> {
        vec![
            row(
                RsaVariant::Standard,
                2048,
                "text_data",
                Duration::from_micros(12_345),
                Duration::from_nanos(987_654_321),
                40960,
                3.456,
            ),
            row(
                RsaVariant::MultiPrime,
                3072,
                "structured_data",
                Duration::from_millis(2),
                Duration::from_secs(1),
                -8192,
                -1.5,
            ),
            row(
                RsaVariant::Aep,
                4096,
                "random_data",
                Duration::ZERO,
                Duration::ZERO,
                0,
                0.0,
            ),
        ]
    }

    const EXPECTED_TABLE: &str = "RSA Variant\tKey Size\tDataset Type\tAvg. Encryption Time\tAvg. Decryption Time\tAvg. Memory Usage\tAvg. CPU Usage\n\
Standard RSA\t2048\ttext_data\t0.012345\t0.987654\t40960\t3.46\n\
Multi-Prime RSA\t3072\tstructured_data\t0.002000\t1.000000\t-8192\t-1.50\n\
RSA-AEP\t4096\trandom_data\t0.000000\t0.000000\t0\t0.00\n";

    #[test]
    fn test_render_table_exact() {
        assert_eq!(render_table(&canned()), EXPECTED_TABLE);
    }

    #[test]
    fn test_render_empty_table_has_header() {
        assert_eq!(render_table(&[]), format!("{}\n", TABLE_COLUMNS.join("\t")));
    }

    #[test]
    fn test_sink_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("results.txt");

        ResultsSink::write(&path, &canned()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), EXPECTED_TABLE);

        // Only the final file remains, no staging leftovers
        let entries = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_sink_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("results.txt");
        fs::write(&path, "stale").unwrap();

        ResultsSink::write(&path, &canned()[..1]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("RSA Variant\t"));
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        // A directory occupies the target path, so the rename must fail
        let path = temp_dir.path().join("results.txt");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = ResultsSink::write(&path, &canned()).unwrap_err();
        assert!(matches!(err, ReporterError::Io(_)));
        assert!(path.is_dir());
    }

    #[test]
    fn test_json_report_save() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = JsonReporter::new(temp_dir.path()).unwrap();

        let report = BenchmarkReport::new(canned(), Vec::new());
        let path = reporter.save(&report).unwrap();
        assert!(path.exists());

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["benchmark_suite"], "rsabench");
        assert_eq!(json["results"].as_array().unwrap().len(), 3);
        assert_eq!(json["results"][1]["config"]["primes"], 3);
        assert!(json.get("failures").is_none());
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("rsabench_"));
    }
}
