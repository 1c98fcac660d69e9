// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Batch cipher runners.
//!
//! Two strategies answer different questions and must stay distinct:
//!
//! - [`WholeBatch`] probes the entire encryption (or decryption) loop as one
//!   unit: "what does this batch cost".
//! - [`PerMessage`] probes every primitive call and sums the samples:
//!   "what is the true sum of per-operation cost". A message that fails
//!   contributes nothing to the sums.
//!
//! Both skip messages the primitive rejects and keep going.

use rsa::{RsaPrivateKey, RsaPublicKey};
use rsabench_core::cipher::{self, PaddingScheme};
use rsabench_core::{Ciphertext, Message, RsaVariant};

use crate::metrics::PhaseMetrics;
use crate::probe::{ResourceProbe, ResourceSampler};

/// Output of one phase together with its measured cost.
#[derive(Debug, Clone)]
pub struct Phase<T> {
    pub output: Vec<T>,
    pub metrics: PhaseMetrics,
}

/// Encrypts and decrypts a batch of messages under a probe.
pub trait BatchCipherRunner {
    fn encrypt_batch<S: ResourceSampler>(
        &self,
        probe: &mut ResourceProbe<S>,
        key: &RsaPublicKey,
        messages: &[Message],
    ) -> Phase<Ciphertext>;

    fn decrypt_batch<S: ResourceSampler>(
        &self,
        probe: &mut ResourceProbe<S>,
        key: &RsaPrivateKey,
        ciphertexts: &[Ciphertext],
    ) -> Phase<Message>;
}

/// Encrypt every message, dropping the ones the primitive rejects.
pub fn encrypt_all(
    key: &RsaPublicKey,
    messages: &[Message],
    padding: PaddingScheme,
) -> Vec<Ciphertext> {
    let mut encrypted = Vec::with_capacity(messages.len());
    for (index, message) in messages.iter().enumerate() {
        match cipher::encrypt(key, message, padding) {
            Ok(ciphertext) => encrypted.push(ciphertext),
            Err(e) => report_encrypt_failure(index, &e),
        }
    }
    encrypted
}

/// Decrypt every ciphertext, dropping the ones the primitive rejects.
pub fn decrypt_all(
    key: &RsaPrivateKey,
    ciphertexts: &[Ciphertext],
    padding: PaddingScheme,
) -> Vec<Message> {
    let mut decrypted = Vec::with_capacity(ciphertexts.len());
    for (index, ciphertext) in ciphertexts.iter().enumerate() {
        match cipher::decrypt(key, ciphertext, padding) {
            Ok(plaintext) => decrypted.push(plaintext),
            Err(e) => report_decrypt_failure(index, &e),
        }
    }
    decrypted
}

fn report_encrypt_failure(index: usize, error: &rsabench_core::CryptoError) {
    tracing::warn!(index, error = %error, "Encryption failed, message skipped");
}

fn report_decrypt_failure(index: usize, error: &rsabench_core::CryptoError) {
    tracing::warn!(index, error = %error, "Decryption failed, ciphertext skipped");
}

/// One probe around the whole batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeBatch {
    padding: PaddingScheme,
}

impl WholeBatch {
    pub fn new(padding: PaddingScheme) -> Self {
        Self { padding }
    }
}

impl BatchCipherRunner for WholeBatch {
    fn encrypt_batch<S: ResourceSampler>(
        &self,
        probe: &mut ResourceProbe<S>,
        key: &RsaPublicKey,
        messages: &[Message],
    ) -> Phase<Ciphertext> {
        let measured = probe.measure(|| encrypt_all(key, messages, self.padding));
        Phase {
            output: measured.value,
            metrics: measured.sample,
        }
    }

    fn decrypt_batch<S: ResourceSampler>(
        &self,
        probe: &mut ResourceProbe<S>,
        key: &RsaPrivateKey,
        ciphertexts: &[Ciphertext],
    ) -> Phase<Message> {
        let measured = probe.measure(|| decrypt_all(key, ciphertexts, self.padding));
        Phase {
            output: measured.value,
            metrics: measured.sample,
        }
    }
}

/// One probe per primitive call, summed over the batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerMessage {
    padding: PaddingScheme,
}

impl PerMessage {
    pub fn new(padding: PaddingScheme) -> Self {
        Self { padding }
    }
}

impl BatchCipherRunner for PerMessage {
    fn encrypt_batch<S: ResourceSampler>(
        &self,
        probe: &mut ResourceProbe<S>,
        key: &RsaPublicKey,
        messages: &[Message],
    ) -> Phase<Ciphertext> {
        let mut output = Vec::with_capacity(messages.len());
        let mut metrics = PhaseMetrics::default();

        for (index, message) in messages.iter().enumerate() {
            let measured = probe.measure(|| cipher::encrypt(key, message, self.padding));
            match measured.value {
                Ok(ciphertext) => {
                    metrics += measured.sample;
                    output.push(ciphertext);
                }
                Err(e) => report_encrypt_failure(index, &e),
            }
        }

        Phase { output, metrics }
    }

    fn decrypt_batch<S: ResourceSampler>(
        &self,
        probe: &mut ResourceProbe<S>,
        key: &RsaPrivateKey,
        ciphertexts: &[Ciphertext],
    ) -> Phase<Message> {
        let mut output = Vec::with_capacity(ciphertexts.len());
        let mut metrics = PhaseMetrics::default();

        for (index, ciphertext) in ciphertexts.iter().enumerate() {
            let measured = probe.measure(|| cipher::decrypt(key, ciphertext, self.padding));
            match measured.value {
                Ok(plaintext) => {
                    metrics += measured.sample;
                    output.push(plaintext);
                }
                Err(e) => report_decrypt_failure(index, &e),
            }
        }

        Phase { output, metrics }
    }
}

/// The closed set of runner strategies.
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    WholeBatch(WholeBatch),
    PerMessage(PerMessage),
}

impl Strategy {
    /// Standard and multi-prime RSA time whole batches; RSA-AEP times each message.
    pub fn for_variant(variant: RsaVariant, padding: PaddingScheme) -> Self {
        match variant {
            RsaVariant::Standard | RsaVariant::MultiPrime => {
                Strategy::WholeBatch(WholeBatch::new(padding))
            }
            RsaVariant::Aep => Strategy::PerMessage(PerMessage::new(padding)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::WholeBatch(_) => "whole_batch",
            Strategy::PerMessage(_) => "per_message",
        }
    }
}

impl BatchCipherRunner for Strategy {
    fn encrypt_batch<S: ResourceSampler>(
        &self,
        probe: &mut ResourceProbe<S>,
        key: &RsaPublicKey,
        messages: &[Message],
    ) -> Phase<Ciphertext> {
        match self {
            Strategy::WholeBatch(runner) => runner.encrypt_batch(probe, key, messages),
            Strategy::PerMessage(runner) => runner.encrypt_batch(probe, key, messages),
        }
    }

    fn decrypt_batch<S: ResourceSampler>(
        &self,
        probe: &mut ResourceProbe<S>,
        key: &RsaPrivateKey,
        ciphertexts: &[Ciphertext],
    ) -> Phase<Message> {
        match self {
            Strategy::WholeBatch(runner) => runner.decrypt_batch(probe, key, ciphertexts),
            Strategy::PerMessage(runner) => runner.decrypt_batch(probe, key, ciphertexts),
        }
    }
}
