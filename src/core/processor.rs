//! End-to-end rewrite of a config file
//!
//! Backup first, then read, filter and write back in place. Nothing is
//! written until the backup has been verified.

use crate::backup::create_backup;
use crate::config::Config;
use crate::core::document::write_config_file;
use crate::core::{dedup_blocks, ConfigDocument, LocationBlock};
use crate::error::{DedupError, Result};
use chrono::Local;
use std::path::PathBuf;
use tracing::{debug, info};

/// Summary of one run
#[derive(Debug)]
pub struct DedupReport {
    /// File that was processed
    pub config_file: PathBuf,
    /// Backup of the pre-run contents (absent for dry runs)
    pub backup_file: Option<PathBuf>,
    /// Location path that was deduplicated
    pub location: String,
    /// True when nothing was written
    pub dry_run: bool,
    /// Every matched block in file order
    pub blocks: Vec<LocationBlock>,
    /// Lines in the original file
    pub input_lines: usize,
    /// Lines in the rewritten file
    pub output_lines: usize,
}

impl DedupReport {
    /// Number of blocks matching the location
    pub fn occurrences(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks dropped from the output
    pub fn removed(&self) -> impl Iterator<Item = &LocationBlock> {
        self.blocks.iter().filter(|b| !b.is_kept())
    }

    /// Number of blocks removed
    pub fn removed_blocks(&self) -> usize {
        self.occurrences().saturating_sub(1)
    }

    /// Total lines removed
    pub fn removed_lines(&self) -> usize {
        self.input_lines - self.output_lines
    }
}

/// Remove duplicate location blocks from `config.config_file`
pub fn process_config_file(config: &Config) -> Result<DedupReport> {
    let path = config.config_file.as_path();

    let backup_file = if config.dry_run {
        None
    } else {
        let backup = create_backup(path, &Local::now().naive_local())?;
        info!("Backup created: {}", backup.display());
        Some(backup)
    };

    let document = ConfigDocument::load(path)?;
    let lines = document.lines();
    debug!("Loaded {} lines from {}", lines.len(), path.display());

    let marker = config.marker();
    let result = dedup_blocks(&lines, &marker);

    if let Some(line) = result.unterminated {
        return Err(DedupError::UnterminatedBlock {
            path: document.path().display().to_string(),
            line,
        });
    }

    for block in result.removed() {
        debug!(
            "Removing duplicate block {} at lines {}-{}",
            block.occurrence,
            block.start_line,
            block.end_line()
        );
    }
    info!(
        "Found {} 'location {}' block(s), removing {} ({} lines)",
        result.occurrences(),
        marker.path(),
        result.removed_blocks(),
        result.removed_lines()
    );

    if let Some(backup) = &backup_file {
        write_config_file(path, &result.to_text(), backup)?;
        info!("Wrote {} lines to {}", result.lines.len(), path.display());
    }

    Ok(DedupReport {
        config_file: config.config_file.clone(),
        backup_file,
        location: config.location.clone(),
        dry_run: config.dry_run,
        input_lines: result.input_lines,
        output_lines: result.lines.len(),
        blocks: result.blocks,
    })
}
