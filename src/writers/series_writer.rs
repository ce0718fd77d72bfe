use crate::error::Result;
use crate::models::ObservationSeries;
use crate::utils::constants::{MISSING_TOKEN, OUTPUT_DATE_FORMAT};
use csv::WriterBuilder;
use std::io::Write;
use tracing::debug;

/// Writes a series back out in the input layout, space separated, no header
pub struct SeriesWriter {
    missing_token: String,
}

impl SeriesWriter {
    pub fn new() -> Self {
        Self {
            missing_token: MISSING_TOKEN.to_string(),
        }
    }

    /// Render the whole series in memory
    pub fn render(&self, series: &ObservationSeries) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(series, &mut buffer)?;
        debug!("Rendered {} records", series.len());
        Ok(buffer)
    }

    pub fn write_to<W: Write>(&self, series: &ObservationSeries, writer: W) -> Result<()> {
        let mut csv_writer = WriterBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .from_writer(writer);

        for record in series.iter() {
            let mut row = Vec::with_capacity(5);
            row.push(record.date().format(OUTPUT_DATE_FORMAT).to_string());
            row.extend(
                record
                    .values()
                    .into_iter()
                    .map(|v| v.map_or_else(|| self.missing_token.clone(), format_value)),
            );
            csv_writer.write_record(&row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for SeriesWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Always keep a decimal point so whole numbers read back as floats
pub fn format_value(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}
