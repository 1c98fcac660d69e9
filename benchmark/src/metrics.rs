// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Standardized metrics types for benchmark results.
//!
//! Per-phase samples, per-trial metrics and the per-configuration
//! arithmetic-mean aggregate that becomes one row of the results table.

use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rsabench_core::{DatasetCategory, KeySize, PrimeCount, RsaVariant};
use serde::{Serialize, Serializer};
use sysinfo::System;

/// Cost of one measured phase (a whole batch, or the sum over messages).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PhaseMetrics {
    /// Wall-clock duration
    #[serde(serialize_with = "as_secs")]
    pub elapsed: Duration,
    /// Resident memory after minus before, in bytes (may be negative)
    pub memory_delta: i64,
    /// CPU utilization after minus before, in percentage points
    pub cpu_delta: f64,
}

impl Add for PhaseMetrics {
    type Output = PhaseMetrics;

    fn add(self, rhs: PhaseMetrics) -> PhaseMetrics {
        PhaseMetrics {
            elapsed: self.elapsed + rhs.elapsed,
            memory_delta: self.memory_delta + rhs.memory_delta,
            cpu_delta: self.cpu_delta + rhs.cpu_delta,
        }
    }
}

impl AddAssign for PhaseMetrics {
    fn add_assign(&mut self, rhs: PhaseMetrics) {
        *self = *self + rhs;
    }
}

impl Sum for PhaseMetrics {
    fn sum<I: Iterator<Item = PhaseMetrics>>(iter: I) -> Self {
        iter.fold(PhaseMetrics::default(), |acc, m| acc + m)
    }
}

/// One trial of one configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrialMetrics {
    pub encryption_time: Duration,
    pub decryption_time: Duration,
    /// Encryption plus decryption memory deltas
    pub memory_delta: i64,
    /// Encryption plus decryption CPU deltas
    pub cpu_delta: f64,
}

impl TrialMetrics {
    pub fn from_phases(encryption: &PhaseMetrics, decryption: &PhaseMetrics) -> Self {
        Self {
            encryption_time: encryption.elapsed,
            decryption_time: decryption.elapsed,
            memory_delta: encryption.memory_delta + decryption.memory_delta,
            cpu_delta: encryption.cpu_delta + decryption.cpu_delta,
        }
    }
}

/// One cell of the experiment matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperimentConfig {
    pub variant: RsaVariant,
    pub key_size: KeySize,
    pub dataset: DatasetCategory,
    pub iterations: u32,
    /// Prime count of the multi-prime key file, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primes: Option<PrimeCount>,
}

impl std::fmt::Display for ExperimentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {} bits / {}", self.variant, self.key_size, self.dataset)
    }
}

/// Arithmetic mean over the trials of one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub config: ExperimentConfig,
    #[serde(serialize_with = "as_secs")]
    pub mean_encryption_time: Duration,
    #[serde(serialize_with = "as_secs")]
    pub mean_decryption_time: Duration,
    /// Mean memory delta in bytes, truncated toward zero
    pub mean_memory_delta: i64,
    pub mean_cpu_delta: f64,
}

impl AggregateResult {
    /// Average the trials. No trials yields an all-zero result.
    pub fn from_trials(config: ExperimentConfig, trials: &[TrialMetrics]) -> Self {
        if trials.is_empty() {
            return Self::zero(config);
        }

        let n = trials.len() as u32;
        let encryption: Duration = trials.iter().map(|t| t.encryption_time).sum();
        let decryption: Duration = trials.iter().map(|t| t.decryption_time).sum();
        let memory: i64 = trials.iter().map(|t| t.memory_delta).sum();
        let cpu: f64 = trials.iter().map(|t| t.cpu_delta).sum();

        Self {
            config,
            mean_encryption_time: encryption / n,
            mean_decryption_time: decryption / n,
            mean_memory_delta: memory / i64::from(n),
            mean_cpu_delta: cpu / f64::from(n),
        }
    }

    pub fn zero(config: ExperimentConfig) -> Self {
        Self {
            config,
            mean_encryption_time: Duration::ZERO,
            mean_decryption_time: Duration::ZERO,
            mean_memory_delta: 0,
            mean_cpu_delta: 0.0,
        }
    }
}

fn as_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Format a duration in human-readable form (auto-selects ns/μs/ms/s).
pub fn format_duration(duration: Duration) -> String {
    let ns = duration.as_nanos();
    if ns < 1_000 {
        format!("{}ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2}μs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2}ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", ns as f64 / 1_000_000_000.0)
    }
}

/// System information captured at benchmark time.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// OS version
    pub os_version: String,
    /// Kernel version (Linux)
    pub kernel_version: Option<String>,
    /// CPU model name
    pub cpu_model: String,
    /// Number of CPU cores
    pub cpu_cores: usize,
    /// Total system memory in bytes
    pub memory_bytes: u64,
    /// Hostname
    pub hostname: String,
}

impl SystemInfo {
    /// Collect current system information.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version(),
            cpu_model: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            cpu_cores: sys.cpus().len(),
            memory_bytes: sys.total_memory(),
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// A configuration that could not be measured.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigFailure {
    pub config: ExperimentConfig,
    pub reason: String,
}

/// Complete benchmark run report.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    /// Suite identifier
    pub benchmark_suite: String,
    /// Framework version
    pub version: String,
    /// Timestamp when benchmarks were run
    pub timestamp: DateTime<Utc>,
    /// System information
    pub system_info: SystemInfo,
    /// Aggregated rows in canonical order
    pub results: Vec<AggregateResult>,
    /// Configurations skipped because of key or dataset errors
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ConfigFailure>,
}

impl BenchmarkReport {
    /// Create a new benchmark report.
    pub fn new(results: Vec<AggregateResult>, failures: Vec<ConfigFailure>) -> Self {
        Self {
            benchmark_suite: "rsabench".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            system_info: SystemInfo::collect(),
            results,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(iterations: u32) -> ExperimentConfig {
        ExperimentConfig {
            variant: RsaVariant::Standard,
            key_size: KeySize::new(2048).unwrap(),
            dataset: DatasetCategory::new("text_data").unwrap(),
            iterations,
            primes: None,
        }
    }

    fn trial(enc_ms: u64, dec_ms: u64, memory: i64, cpu: f64) -> TrialMetrics {
        TrialMetrics {
            encryption_time: Duration::from_millis(enc_ms),
            decryption_time: Duration::from_millis(dec_ms),
            memory_delta: memory,
            cpu_delta: cpu,
        }
    }

    #[test]
    fn test_mean_of_trials() {
        let trials = [trial(10, 40, 100, 1.0), trial(20, 60, 300, 3.0)];
        let result = AggregateResult::from_trials(config(2), &trials);

        assert_eq!(result.mean_encryption_time, Duration::from_millis(15));
        assert_eq!(result.mean_decryption_time, Duration::from_millis(50));
        assert_eq!(result.mean_memory_delta, 200);
        assert!((result.mean_cpu_delta - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_trials_average_exactly() {
        for n in [1u32, 5, 10] {
            let trials = vec![trial(7, 9, -4096, 2.5); n as usize];
            let result = AggregateResult::from_trials(config(n), &trials);
            assert_eq!(result.mean_encryption_time, Duration::from_millis(7));
            assert_eq!(result.mean_decryption_time, Duration::from_millis(9));
            assert_eq!(result.mean_memory_delta, -4096);
            assert_eq!(result.mean_cpu_delta, 2.5);
        }
    }

    #[test]
    fn test_no_trials_is_zero() {
        let result = AggregateResult::from_trials(config(3), &[]);
        assert_eq!(result, AggregateResult::zero(config(3)));
    }

    #[test]
    fn test_memory_mean_truncates() {
        let trials = [trial(0, 0, 1, 0.0), trial(0, 0, 2, 0.0)];
        assert_eq!(AggregateResult::from_trials(config(2), &trials).mean_memory_delta, 1);
    }

    #[test]
    fn test_trial_sums_phases() {
        let enc = PhaseMetrics {
            elapsed: Duration::from_millis(3),
            memory_delta: 512,
            cpu_delta: 0.5,
        };
        let dec = PhaseMetrics {
            elapsed: Duration::from_millis(8),
            memory_delta: -128,
            cpu_delta: 1.0,
        };
        let trial = TrialMetrics::from_phases(&enc, &dec);
        assert_eq!(trial.encryption_time, Duration::from_millis(3));
        assert_eq!(trial.decryption_time, Duration::from_millis(8));
        assert_eq!(trial.memory_delta, 384);
        assert_eq!(trial.cpu_delta, 1.5);
    }

    #[test]
    fn test_phase_metrics_sum() {
        let total: PhaseMetrics = (1..=3)
            .map(|i| PhaseMetrics {
                elapsed: Duration::from_micros(i),
                memory_delta: i as i64,
                cpu_delta: 0.25,
            })
            .sum();
        assert_eq!(total.elapsed, Duration::from_micros(6));
        assert_eq!(total.memory_delta, 6);
        assert_eq!(total.cpu_delta, 0.75);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "500ns");
        assert_eq!(format_duration(Duration::from_nanos(1500)), "1.50μs");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
    }

    #[test]
    fn test_system_info_collect() {
        let info = SystemInfo::collect();
        assert!(!info.os.is_empty());
        assert!(info.cpu_cores > 0);
        assert!(info.memory_bytes > 0);
    }

    #[test]
    fn test_aggregate_serialization() {
        let result = AggregateResult::from_trials(config(1), &[trial(1500, 250, 64, 0.5)]);
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"variant\": \"standard\""));
        assert!(json.contains("\"key_size\": 2048"));
        assert!(json.contains("\"mean_encryption_time\": 1.5"));
        assert!(!json.contains("primes"));
    }
}
