use crate::error::Result;
use crate::models::{AuditLedger, Variable};
use clap::ValueEnum;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Tab-separated table, one row per rule
    #[default]
    Table,
    /// JSON document with one object per rule
    Json,
}

/// Writes the audit ledger: rules as rows, variables as columns
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self {
            format: ReportFormat::Table,
        }
    }

    pub fn with_format(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Render the report in memory
    pub fn render(&self, ledger: &AuditLedger) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(ledger, &mut buffer)?;
        debug!("Rendered {:?} report", self.format);
        Ok(buffer)
    }

    pub fn write_to<W: Write>(&self, ledger: &AuditLedger, writer: W) -> Result<()> {
        match self.format {
            ReportFormat::Table => self.write_table(ledger, writer),
            ReportFormat::Json => {
                let mut writer = writer;
                serde_json::to_writer_pretty(&mut writer, &ledger.to_report())?;
                writeln!(writer)?;
                Ok(())
            }
        }
    }

    fn write_table<W: Write>(&self, ledger: &AuditLedger, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_writer(writer);

        let mut header = vec![String::new()];
        header.extend(Variable::ALL.iter().map(|v| v.label().to_string()));
        csv_writer.write_record(&header)?;

        for (rule, counts) in ledger.rows() {
            let mut row = vec![rule.label().to_string()];
            row.extend(counts.as_array().iter().map(|c| c.to_string()));
            csv_writer.write_record(&row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
