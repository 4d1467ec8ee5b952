//! nginx-location-dedup - Duplicate nginx location block remover
//!
//! Rewrites a site config in place so that only the first
//! `location <path>` block survives, after taking a timestamped backup.

mod backup;
mod cli;
mod config;
mod core;
mod error;
mod export;

use clap::Parser;
use cli::Cli;
use core::process_config_file;
use export::create_exporter;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Convert to config
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    init_tracing(config.default_log_filter());

    // === Phase 1: Backup, filter and rewrite ===
    let report = match process_config_file(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // === Phase 2: Report ===
    let exporter = create_exporter(config.output_format);
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if let Err(e) = exporter.export(&report, &mut writer) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = writer.flush() {
        eprintln!("Error flushing output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `-v`
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
