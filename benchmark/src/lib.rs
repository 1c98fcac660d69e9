// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! RSA Benchmark Harness
//!
//! Measures and compares standard RSA, multi-prime RSA and RSA-AEP under
//! OAEP-SHA256 across key sizes and dataset categories.
//!
//! # Components
//!
//! - **Probe**: samples time, resident memory and CPU around an operation
//! - **Runners**: whole-batch and per-message measurement strategies
//! - **Orchestrator**: walks the experiment matrix and averages trials
//!
//! # Data Output
//!
//! Results are written as a tab-delimited table for the plotting scripts,
//! and optionally as a JSON report with system information.

pub mod metrics;
pub mod orchestrator;
pub mod probe;
pub mod reporter;
pub mod runner;

pub use metrics::{
    AggregateResult, BenchmarkReport, ConfigFailure, ExperimentConfig, PhaseMetrics, SystemInfo,
    TrialMetrics,
};
pub use orchestrator::{ExperimentOrchestrator, RunSummary};
pub use probe::{FixedCostSampler, Measured, ResourceProbe, ResourceSampler, SystemSampler};
pub use reporter::{render_table, JsonReporter, ReporterError, ResultsSink};
pub use runner::{BatchCipherRunner, PerMessage, Phase, Strategy, WholeBatch};
