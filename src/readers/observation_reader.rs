use crate::error::{QcError, Result};
use crate::models::{AuditLedger, DailyObservation, ObservationSeries};
use crate::utils::constants::{DATE_FORMATS, DEFAULT_BUFFER_SIZE};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Columns per record: date, precip, max temp, min temp, wind speed
const FIELD_COUNT: usize = 5;

/// Reads whitespace-delimited daily records with no header
pub struct ObservationReader;

impl ObservationReader {
    pub fn new() -> Self {
        Self
    }

    /// Load a series from disk along with a freshly zeroed ledger
    pub fn read_observations(&self, path: &Path) -> Result<(ObservationSeries, AuditLedger)> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let series = self.read_from(reader)?;

        info!(
            "Loaded {} daily records from {}",
            series.len(),
            path.display()
        );

        Ok((series, AuditLedger::new()))
    }

    pub fn read_from<R: BufRead>(&self, reader: R) -> Result<ObservationSeries> {
        let mut series = ObservationSeries::new();

        for (i, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line_number = i + 1;

            if let Some(record) = self.parse_observation_line(&line, line_number)? {
                series.push(record, line_number)?;
            }
        }

        if let Some((first, last)) = series.date_range() {
            debug!("Series spans {} to {}", first, last);
        }

        Ok(series)
    }

    pub fn parse_str(&self, content: &str) -> Result<ObservationSeries> {
        self.read_from(content.as_bytes())
    }

    /// Parse one line. Blank lines yield `None`.
    fn parse_observation_line(
        &self,
        line: &str,
        line_number: usize,
    ) -> Result<Option<DailyObservation>> {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.is_empty() {
            return Ok(None);
        }

        if parts.len() != FIELD_COUNT {
            return Err(QcError::parse(
                line_number,
                format!(
                    "expected {} fields, found {}: '{}'",
                    FIELD_COUNT,
                    parts.len(),
                    line.trim()
                ),
            ));
        }

        let date = parse_date(parts[0]).ok_or_else(|| {
            QcError::parse(line_number, format!("invalid date: '{}'", parts[0]))
        })?;

        let mut values = [None; 4];
        for (slot, field) in values.iter_mut().zip(&parts[1..]) {
            *slot = parse_value(field, line_number)?;
        }

        Ok(Some(DailyObservation::from_values(date, values)))
    }
}

impl Default for ObservationReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_date(token: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(token, format).ok())
}

/// A literal NaN is read as already missing; infinities are rejected.
fn parse_value(token: &str, line_number: usize) -> Result<Option<f64>> {
    let value = token
        .parse::<f64>()
        .map_err(|_| QcError::parse(line_number, format!("invalid number: '{}'", token)))?;

    if value.is_nan() {
        Ok(None)
    } else if value.is_infinite() {
        Err(QcError::parse(
            line_number,
            format!("non-finite number: '{}'", token),
        ))
    } else {
        Ok(Some(value))
    }
}
