//! Console (human-readable) exporter

use crate::core::DedupReport;
use crate::error::Result;
use crate::export::Exporter;
use std::io::Write;

/// Human-readable console output exporter
pub struct ConsoleExporter;

impl Exporter for ConsoleExporter {
    fn export(&self, report: &DedupReport, writer: &mut dyn Write) -> Result<()> {
        if let Some(backup) = &report.backup_file {
            writeln!(writer, "Backup created: {}", backup.display())?;
            writeln!(writer)?;
        }

        let verb = if report.dry_run { "Would remove" } else { "Removing" };
        for block in report.removed() {
            writeln!(
                writer,
                "{} duplicate block starting at line {} ({} lines)",
                verb, block.start_line, block.line_count
            )?;
        }

        if report.dry_run {
            writeln!(
                writer,
                "Would remove {} duplicate 'location {}' block(s)",
                report.removed_blocks(),
                report.location
            )?;
            writeln!(writer)?;
            writeln!(
                writer,
                "Dry run: {} was not modified",
                report.config_file.display()
            )?;
        } else {
            writeln!(
                writer,
                "Removed {} duplicate 'location {}' block(s)",
                report.removed_blocks(),
                report.location
            )?;
            writeln!(writer)?;
            writeln!(writer, "Config file fixed successfully!")?;
        }

        Ok(())
    }
}
