// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! RSA Benchmark CLI
//!
//! Command-line interface for the RSA variant benchmark harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

/// rsabench - Compare standard, multi-prime and AEP RSA under OAEP-SHA256
#[derive(Parser)]
#[command(name = "rsabench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "rsabench.yaml")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the experiment matrix and write the results table
    Run {
        /// Trials per configuration (overrides the config file)
        #[arg(short, long)]
        iterations: Option<u32>,

        /// Results table path (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also save a JSON report into this directory
        #[arg(long)]
        json_dir: Option<PathBuf>,
    },

    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        file: String,
    },

    /// Generate key pairs for every variant and key size
    Keygen {
        /// Key directory (overrides the config file)
        #[arg(long)]
        key_dir: Option<PathBuf>,
    },

    /// Generate the message dataset
    Datagen {
        /// Dataset directory (overrides the config file)
        #[arg(long)]
        dataset_dir: Option<PathBuf>,

        /// Files per category
        #[arg(long, default_value_t = 100)]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Run {
            iterations,
            output,
            json_dir,
        } => commands::run::execute(&cli.config, iterations, output, json_dir),
        Commands::Validate { file } => commands::validate::execute(&file),
        Commands::Keygen { key_dir } => commands::keygen::execute(&cli.config, key_dir),
        Commands::Datagen { dataset_dir, count } => {
            commands::datagen::execute(&cli.config, dataset_dir, count)
        }
    }
}
