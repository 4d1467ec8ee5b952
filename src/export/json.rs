//! JSON exporter

use crate::core::DedupReport;
use crate::error::Result;
use crate::export::Exporter;
use serde::Serialize;
use std::io::Write;

/// JSON output exporter
pub struct JsonExporter;

#[derive(Serialize)]
struct JsonOutput {
    config_file: String,
    backup_file: Option<String>,
    location: String,
    dry_run: bool,
    removed: Vec<JsonBlock>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonBlock {
    occurrence: usize,
    start_line: usize,
    end_line: usize,
    line_count: usize,
}

#[derive(Serialize)]
struct JsonSummary {
    occurrences: usize,
    removed_blocks: usize,
    removed_lines: usize,
    input_lines: usize,
    output_lines: usize,
}

impl Exporter for JsonExporter {
    fn export(&self, report: &DedupReport, writer: &mut dyn Write) -> Result<()> {
        let removed = report
            .removed()
            .map(|block| JsonBlock {
                occurrence: block.occurrence,
                start_line: block.start_line,
                end_line: block.end_line(),
                line_count: block.line_count,
            })
            .collect();

        let output = JsonOutput {
            config_file: report.config_file.display().to_string(),
            backup_file: report.backup_file.as_ref().map(|p| p.display().to_string()),
            location: report.location.clone(),
            dry_run: report.dry_run,
            removed,
            summary: JsonSummary {
                occurrences: report.occurrences(),
                removed_blocks: report.removed_blocks(),
                removed_lines: report.removed_lines(),
                input_lines: report.input_lines,
                output_lines: report.output_lines,
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;

        Ok(())
    }
}
