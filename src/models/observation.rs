use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{QcError, Result};
use crate::utils::constants::{
    MAX_VALID_PRECIP, MAX_VALID_TEMP, MAX_VALID_WIND, MIN_VALID_PRECIP, MIN_VALID_TEMP,
    MIN_VALID_WIND,
};

/// Observed quantities, in file column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variable {
    Precip,
    MaxTemp,
    MinTemp,
    WindSpeed,
}

impl Variable {
    pub const ALL: [Variable; 4] = [
        Variable::Precip,
        Variable::MaxTemp,
        Variable::MinTemp,
        Variable::WindSpeed,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variable::Precip => "Precip",
            Variable::MaxTemp => "Max Temp",
            Variable::MinTemp => "Min Temp",
            Variable::WindSpeed => "Wind Speed",
        }
    }

    pub fn units(&self) -> &'static str {
        match self {
            Variable::Precip => "mm",
            Variable::MaxTemp | Variable::MinTemp => "°C",
            Variable::WindSpeed => "m/s",
        }
    }

    /// Physically plausible values, inclusive at both ends
    pub fn valid_range(&self) -> RangeInclusive<f64> {
        match self {
            Variable::Precip => MIN_VALID_PRECIP..=MAX_VALID_PRECIP,
            Variable::MaxTemp | Variable::MinTemp => MIN_VALID_TEMP..=MAX_VALID_TEMP,
            Variable::WindSpeed => MIN_VALID_WIND..=MAX_VALID_WIND,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One day of observations. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    date: NaiveDate,
    pub precip: Option<f64>,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub wind_speed: Option<f64>,
}

impl DailyObservation {
    pub fn new(
        date: NaiveDate,
        precip: Option<f64>,
        max_temp: Option<f64>,
        min_temp: Option<f64>,
        wind_speed: Option<f64>,
    ) -> Self {
        Self {
            date,
            precip,
            max_temp,
            min_temp,
            wind_speed,
        }
    }

    pub fn from_values(date: NaiveDate, values: [Option<f64>; 4]) -> Self {
        let [precip, max_temp, min_temp, wind_speed] = values;
        Self::new(date, precip, max_temp, min_temp, wind_speed)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn get(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::Precip => self.precip,
            Variable::MaxTemp => self.max_temp,
            Variable::MinTemp => self.min_temp,
            Variable::WindSpeed => self.wind_speed,
        }
    }

    pub fn get_mut(&mut self, variable: Variable) -> &mut Option<f64> {
        match variable {
            Variable::Precip => &mut self.precip,
            Variable::MaxTemp => &mut self.max_temp,
            Variable::MinTemp => &mut self.min_temp,
            Variable::WindSpeed => &mut self.wind_speed,
        }
    }

    pub fn values(&self) -> [Option<f64>; 4] {
        [self.precip, self.max_temp, self.min_temp, self.wind_speed]
    }

    /// Both temperatures, only when both are present
    pub fn temperature_pair(&self) -> Option<(f64, f64)> {
        self.max_temp.zip(self.min_temp)
    }

    pub fn swap_temperatures(&mut self) {
        std::mem::swap(&mut self.max_temp, &mut self.min_temp);
    }

    pub fn clear_temperatures(&mut self) {
        self.max_temp = None;
        self.min_temp = None;
    }
}

/// Daily records in file order, unique by date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSeries {
    records: Vec<DailyObservation>,
    index: HashMap<NaiveDate, usize>,
}

impl ObservationSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series, rejecting repeated dates
    pub fn from_records(records: Vec<DailyObservation>) -> Result<Self> {
        let mut series = Self::new();
        for (i, record) in records.into_iter().enumerate() {
            series.push(record, i + 1)?;
        }
        Ok(series)
    }

    /// Append a record; `line` is reported if the date is already present
    pub fn push(&mut self, record: DailyObservation, line: usize) -> Result<()> {
        if self.index.contains_key(&record.date) {
            return Err(QcError::DuplicateDate {
                line,
                date: record.date,
            });
        }
        self.index.insert(record.date, self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DailyObservation] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyObservation> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut DailyObservation> {
        self.records.iter_mut()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyObservation> {
        self.index.get(&date).map(|&i| &self.records[i])
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.records.iter().map(|r| r.date)
    }

    pub fn column(&self, variable: Variable) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.get(variable)).collect()
    }

    pub fn missing_count(&self, variable: Variable) -> usize {
        self.records
            .iter()
            .filter(|r| r.get(variable).is_none())
            .count()
    }

    pub fn missing_counts(&self) -> [usize; 4] {
        Variable::ALL.map(|v| self.missing_count(v))
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?.date;
        let last = self.records.last()?.date;
        Some((first, last))
    }
}
