//! CLI argument parsing using clap

use crate::config::{Config, OutputFormat, DEFAULT_CONFIG_FILE, DEFAULT_LOCATION};
use crate::error::{DedupError, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Duplicate nginx location block remover
#[derive(Parser, Debug)]
#[command(name = "nginx-location-dedup")]
#[command(version)]
#[command(about = "Remove duplicate nginx location blocks, keeping the first", long_about = None)]
pub struct Cli {
    /// Site config file to fix in place
    #[arg(value_name = "CONFIG_FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Location path identifying the blocks to deduplicate
    #[arg(short = 'l', long = "location", value_name = "PATH", default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Report duplicates without creating a backup or modifying the file
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,

    /// Output the report in JSON format
    #[arg(long = "json")]
    pub json: bool,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments into a Config
    pub fn into_config(self) -> Result<Config> {
        if self.location.is_empty() {
            return Err(DedupError::InvalidConfig(
                "location path must not be empty".to_string(),
            ));
        }
        if self.location.chars().any(char::is_whitespace) {
            return Err(DedupError::InvalidConfig(format!(
                "location path '{}' must not contain whitespace",
                self.location
            )));
        }

        let output_format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Console
        };

        Ok(Config {
            config_file: self.config_file,
            location: self.location,
            dry_run: self.dry_run,
            output_format,
            verbosity: self.verbose,
        })
    }
}
