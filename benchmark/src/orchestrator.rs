// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Experiment matrix orchestration.
//!
//! Walks variant -> key size -> dataset category, runs `iterations` trials
//! per configuration and averages them. Configurations run strictly one
//! after another, and within a trial encryption finishes before decryption
//! starts, so process-wide samples belong to exactly one phase.

use rsabench_core::{
    BenchResult, BenchmarkSettings, KeyPair, KeySource, KeySpec, Message, MessageSource,
    PaddingScheme, RsaVariant,
};

use crate::metrics::{AggregateResult, ConfigFailure, ExperimentConfig, TrialMetrics};
use crate::probe::{ResourceProbe, ResourceSampler};
use crate::runner::{BatchCipherRunner, Strategy};

/// Outcome of a full matrix run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// One row per measured configuration, canonical order
    pub results: Vec<AggregateResult>,
    /// Configurations skipped because of key or dataset errors
    pub failures: Vec<ConfigFailure>,
}

/// Drives the experiment matrix.
pub struct ExperimentOrchestrator<K, M, S> {
    settings: BenchmarkSettings,
    keys: K,
    messages: M,
    probe: ResourceProbe<S>,
    padding: PaddingScheme,
}

impl<K, M, S> ExperimentOrchestrator<K, M, S>
where
    K: KeySource,
    M: MessageSource,
    S: ResourceSampler,
{
    pub fn new(settings: BenchmarkSettings, keys: K, messages: M, sampler: S) -> Self {
        Self {
            settings,
            keys,
            messages,
            probe: ResourceProbe::new(sampler),
            padding: PaddingScheme::OaepSha256,
        }
    }

    /// Every configuration of the matrix in output order.
    pub fn configurations(&self) -> Vec<ExperimentConfig> {
        let mut configs = Vec::with_capacity(self.settings.matrix_len());
        for &variant in &self.settings.variants {
            for &key_size in &self.settings.key_sizes {
                let primes = match variant {
                    RsaVariant::MultiPrime => self.settings.primes_for(key_size),
                    _ => None,
                };
                for dataset in &self.settings.datasets {
                    configs.push(ExperimentConfig {
                        variant,
                        key_size,
                        dataset: dataset.clone(),
                        iterations: self.settings.iterations,
                        primes,
                    });
                }
            }
        }
        configs
    }

    /// Run the whole matrix.
    ///
    /// A configuration whose key or dataset cannot be loaded is recorded as
    /// a failure and the run moves on to the next one.
    pub fn run(&mut self) -> RunSummary {
        let mut summary = RunSummary::default();
        let configs = self.configurations();
        let total = configs.len();

        for (position, config) in configs.into_iter().enumerate() {
            tracing::info!(
                variant = %config.variant,
                key_size = %config.key_size,
                dataset = %config.dataset,
                index = position + 1,
                total,
                "Running experiment"
            );

            match self.run_configuration(&config) {
                Ok(result) => summary.results.push(result),
                Err(e) => {
                    tracing::error!(
                        variant = %config.variant,
                        key_size = %config.key_size,
                        dataset = %config.dataset,
                        error = %e,
                        "Configuration failed, skipping"
                    );
                    summary.failures.push(ConfigFailure {
                        config,
                        reason: e.to_string(),
                    });
                }
            }
        }

        summary
    }

    /// Run all trials of one configuration and average them.
    pub fn run_configuration(&mut self, config: &ExperimentConfig) -> BenchResult<AggregateResult> {
        let spec = KeySpec::new(config.variant, config.key_size, config.primes);
        let keys = self.keys.load(&spec)?;
        let strategy = Strategy::for_variant(config.variant, self.padding);

        let mut trials = Vec::with_capacity(config.iterations as usize);
        for iteration in 0..config.iterations {
            // Fresh read every trial: filesystem caching is part of what is measured
            let messages = self.messages.load(&config.dataset)?;

            if messages.is_empty() {
                if iteration == 0 {
                    tracing::warn!(
                        dataset = %config.dataset,
                        "Dataset category is empty, reporting zero metrics"
                    );
                }
                trials.push(TrialMetrics::default());
                continue;
            }

            trials.push(self.run_trial(&strategy, &keys, &messages));
        }

        Ok(AggregateResult::from_trials(config.clone(), &trials))
    }

    fn run_trial(
        &mut self,
        strategy: &Strategy,
        keys: &KeyPair,
        messages: &[Message],
    ) -> TrialMetrics {
        let encrypted = strategy.encrypt_batch(&mut self.probe, keys.public_key(), messages);
        let decrypted =
            strategy.decrypt_batch(&mut self.probe, keys.private_key(), &encrypted.output);

        tracing::debug!(
            strategy = strategy.name(),
            messages = messages.len(),
            encrypted = encrypted.output.len(),
            decrypted = decrypted.output.len(),
            "Trial complete"
        );

        TrialMetrics::from_phases(&encrypted.metrics, &decrypted.metrics)
    }
}
