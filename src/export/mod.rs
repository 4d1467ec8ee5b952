//! Report output for a dedup run

mod console;
mod json;

use crate::config::OutputFormat;
use crate::core::DedupReport;
use crate::error::Result;
use std::io::Write;

pub use console::ConsoleExporter;
pub use json::JsonExporter;

/// Trait for output formatting
pub trait Exporter {
    /// Write the complete report
    fn export(&self, report: &DedupReport, writer: &mut dyn Write) -> Result<()>;
}

/// Create an appropriate exporter based on configuration
pub fn create_exporter(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleExporter),
        OutputFormat::Json => Box::new(JsonExporter),
    }
}
