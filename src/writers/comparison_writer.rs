use crate::error::Result;
use crate::models::{ObservationSeries, Variable};
use crate::utils::constants::OUTPUT_DATE_FORMAT;
use crate::utils::filename::comparison_path;
use crate::writers::series_writer::format_value;
use csv::Writer;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Before/after tables per variable, for charting raw against cleaned values
pub struct ComparisonWriter;

impl ComparisonWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write one CSV per variable into `dir`, returning the paths written
    pub fn write_comparisons(
        &self,
        raw: &ObservationSeries,
        cleaned: &ObservationSeries,
        dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(Variable::ALL.len());
        for variable in Variable::ALL {
            let path = comparison_path(dir, variable);
            let file = std::fs::File::create(&path)?;
            self.write_variable(raw, cleaned, variable, file)?;
            debug!("Wrote {} comparison to {}", variable, path.display());
            written.push(path);
        }

        info!("Wrote {} comparison files to {}", written.len(), dir.display());
        Ok(written)
    }

    /// Rows follow the cleaned series; dates absent from `raw` get an empty
    /// before value
    pub fn write_variable<W: Write>(
        &self,
        raw: &ObservationSeries,
        cleaned: &ObservationSeries,
        variable: Variable,
        writer: W,
    ) -> Result<()> {
        let mut csv_writer = Writer::from_writer(writer);
        csv_writer.write_record(["Date", "Before", "After"])?;

        for record in cleaned.iter() {
            let before = raw.get(record.date()).and_then(|r| r.get(variable));
            csv_writer.write_record([
                record.date().format(OUTPUT_DATE_FORMAT).to_string(),
                before.map(format_value).unwrap_or_default(),
                record.get(variable).map(format_value).unwrap_or_default(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for ComparisonWriter {
    fn default() -> Self {
        Self::new()
    }
}
