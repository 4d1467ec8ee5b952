//! Configuration types for nginx-location-dedup

use crate::core::LocationMarker;
use std::path::PathBuf;

/// Site config rewritten when no path is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "/etc/nginx/sites-enabled/wicaalinvestments.com";

/// Location path whose duplicate blocks are removed by default
pub const DEFAULT_LOCATION: &str = "/api/images";

/// Output format for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Console,
    /// JSON output with structured data
    Json,
}

/// Configuration options, built once at start-up
#[derive(Debug, Clone)]
pub struct Config {
    /// Config file to deduplicate in place
    pub config_file: PathBuf,

    /// Path token following the `location` keyword on a block's first line
    pub location: String,

    /// Report what would be removed without creating a backup or writing
    pub dry_run: bool,

    /// Output format (console or json)
    pub output_format: OutputFormat,

    /// Number of `-v` flags; selects the default log level
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            location: String::from(DEFAULT_LOCATION),
            dry_run: false,
            output_format: OutputFormat::Console,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Marker matching the first line of the blocks to deduplicate
    pub fn marker(&self) -> LocationMarker {
        LocationMarker::new(&self.location)
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
