// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Resource probe wrapping a measured operation.
//!
//! Samples a monotonic clock, process resident memory and CPU utilization
//! immediately before and after an operation and reports the differences.
//! Memory and CPU readings are best-effort: when the host cannot provide
//! them the probe logs a warning once and reports zero for that metric.
//!
//! The CPU figure is the difference of two instantaneous utilization
//! samples, not an integral over the call, and is noisy. Readings are only
//! meaningful when nothing else in the process runs during the window.

use std::time::{Duration, Instant};

use sysinfo::{Pid, System};
use thiserror::Error;

use crate::metrics::PhaseMetrics;

/// Errors from a single resource sample.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Current process id unavailable: {0}")]
    NoProcessId(&'static str),

    #[error("Process {pid} not found in process table")]
    ProcessNotFound { pid: u32 },

    #[error("CPU usage not available on this host")]
    CpuUnavailable,
}

/// Source of clock, memory and CPU readings.
pub trait ResourceSampler {
    /// Monotonic timestamp relative to an arbitrary origin.
    fn now(&mut self) -> Duration;

    /// Resident set size of the current process in bytes.
    fn resident_memory(&mut self) -> Result<u64, SampleError>;

    /// System-wide CPU utilization in percent.
    fn cpu_usage(&mut self) -> Result<f32, SampleError>;
}

/// Samples the running process through `sysinfo`.
pub struct SystemSampler {
    system: System,
    pid: Result<Pid, &'static str>,
    origin: Instant,
}

impl SystemSampler {
    pub fn new() -> Self {
        let mut system = System::new();
        // Prime the CPU counters so the first reading has a baseline
        system.refresh_cpu();

        Self {
            system,
            pid: sysinfo::get_current_pid(),
            origin: Instant::now(),
        }
    }
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceSampler for SystemSampler {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }

    fn resident_memory(&mut self) -> Result<u64, SampleError> {
        let pid = self.pid.map_err(SampleError::NoProcessId)?;

        if !self.system.refresh_process(pid) {
            return Err(SampleError::ProcessNotFound { pid: pid.as_u32() });
        }

        self.system
            .process(pid)
            .map(|process| process.memory())
            .ok_or(SampleError::ProcessNotFound { pid: pid.as_u32() })
    }

    fn cpu_usage(&mut self) -> Result<f32, SampleError> {
        self.system.refresh_cpu();
        if self.system.cpus().is_empty() {
            return Err(SampleError::CpuUnavailable);
        }
        Ok(self.system.global_cpu_info().cpu_usage())
    }
}

/// Deterministic sampler whose readings advance by a fixed step per call.
///
/// Every probed operation appears to cost exactly `elapsed`, `memory` bytes
/// and `cpu` percent, independent of the host. Used for reproducible
/// harness tests and for benchmarking the strategies without sampling cost.
#[derive(Debug, Clone)]
pub struct FixedCostSampler {
    elapsed: Duration,
    memory: u64,
    cpu: f32,
    clock_ticks: u32,
    memory_ticks: u64,
    cpu_ticks: u32,
}

impl FixedCostSampler {
    pub fn new(elapsed: Duration, memory: u64, cpu: f32) -> Self {
        Self {
            elapsed,
            memory,
            cpu,
            clock_ticks: 0,
            memory_ticks: 0,
            cpu_ticks: 0,
        }
    }

    /// Number of clock readings taken so far (two per probed operation).
    pub fn clock_readings(&self) -> u32 {
        self.clock_ticks
    }
}

impl ResourceSampler for FixedCostSampler {
    fn now(&mut self) -> Duration {
        let reading = self.elapsed * self.clock_ticks;
        self.clock_ticks += 1;
        reading
    }

    fn resident_memory(&mut self) -> Result<u64, SampleError> {
        let reading = self.memory * self.memory_ticks;
        self.memory_ticks += 1;
        Ok(reading)
    }

    fn cpu_usage(&mut self) -> Result<f32, SampleError> {
        let reading = self.cpu * self.cpu_ticks as f32;
        self.cpu_ticks += 1;
        Ok(reading)
    }
}

/// Result of a probed operation.
#[derive(Debug, Clone)]
pub struct Measured<T> {
    /// Whatever the operation returned, untouched
    pub value: T,
    /// Elapsed time and resource deltas of the call
    pub sample: PhaseMetrics,
}

/// Wraps operations with before/after resource sampling.
pub struct ResourceProbe<S> {
    sampler: S,
    memory_warned: bool,
    cpu_warned: bool,
}

impl<S: ResourceSampler> ResourceProbe<S> {
    pub fn new(sampler: S) -> Self {
        Self {
            sampler,
            memory_warned: false,
            cpu_warned: false,
        }
    }

    /// Run `operation` once and measure it.
    ///
    /// The probe never retries and never inspects the returned value;
    /// failures encoded in `T` reach the caller unchanged.
    pub fn measure<F, T>(&mut self, operation: F) -> Measured<T>
    where
        F: FnOnce() -> T,
    {
        let start_time = self.sampler.now();
        let start_memory = self.memory();
        let start_cpu = self.cpu();

        let value = operation();

        let end_time = self.sampler.now();
        let end_memory = self.memory();
        let end_cpu = self.cpu();

        let memory_delta = match (start_memory, end_memory) {
            (Some(start), Some(end)) => end as i64 - start as i64,
            _ => 0,
        };
        let cpu_delta = match (start_cpu, end_cpu) {
            (Some(start), Some(end)) => f64::from(end) - f64::from(start),
            _ => 0.0,
        };

        Measured {
            value,
            sample: PhaseMetrics {
                elapsed: end_time.saturating_sub(start_time),
                memory_delta,
                cpu_delta,
            },
        }
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    fn memory(&mut self) -> Option<u64> {
        match self.sampler.resident_memory() {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                if !self.memory_warned {
                    tracing::warn!(error = %e, "Memory sampling unavailable, reporting 0");
                    self.memory_warned = true;
                }
                None
            }
        }
    }

    fn cpu(&mut self) -> Option<f32> {
        match self.sampler.cpu_usage() {
            Ok(percent) => Some(percent),
            Err(e) => {
                if !self.cpu_warned {
                    tracing::warn!(error = %e, "CPU sampling unavailable, reporting 0");
                    self.cpu_warned = true;
                }
                None
            }
        }
    }
}
