use crate::models::{ObservationSeries, Variable};
use serde::Serialize;
use std::fmt;

/// Descriptive statistics for the present values of one variable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub variable: Variable,
    pub count: usize,
    pub missing: usize,
    pub distribution: Option<Distribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub mean: f64,
    /// Sample standard deviation; undefined for a single value
    pub std_dev: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub total_records: usize,
    pub columns: Vec<ColumnStats>,
}

impl SeriesSummary {
    pub fn column(&self, variable: Variable) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.variable == variable)
    }
}

pub struct SeriesAnalyzer;

impl SeriesAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn describe(&self, series: &ObservationSeries) -> SeriesSummary {
        let columns = Variable::ALL
            .iter()
            .map(|&variable| {
                let mut values: Vec<f64> = series.column(variable).into_iter().flatten().collect();
                values.sort_by(|a, b| a.total_cmp(b));

                ColumnStats {
                    variable,
                    count: values.len(),
                    missing: series.len() - values.len(),
                    distribution: distribution(&values),
                }
            })
            .collect();

        SeriesSummary {
            total_records: series.len(),
            columns,
        }
    }
}

impl Default for SeriesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// `sorted` must be in ascending order
fn distribution(sorted: &[f64]) -> Option<Distribution> {
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;

    let std_dev = if sorted.len() > 1 {
        let sum_sq: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
        Some((sum_sq / (n - 1.0)).sqrt())
    } else {
        None
    };

    Some(Distribution {
        mean,
        std_dev,
        min,
        q25: quantile(sorted, 0.25),
        median: quantile(sorted, 0.5),
        q75: quantile(sorted, 0.75),
        max,
    })
}

/// Linear interpolation between closest ranks
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = ["count", "missing", "mean", "std", "min", "25%", "50%", "75%", "max"];

        write!(f, "{:<8}", "")?;
        for column in &self.columns {
            write!(f, "{:>12}", column.variable.label())?;
        }
        writeln!(f)?;

        for (i, stat) in stats.iter().enumerate() {
            write!(f, "{:<8}", stat)?;
            for column in &self.columns {
                let cell = match i {
                    0 => column.count.to_string(),
                    1 => column.missing.to_string(),
                    _ => column
                        .distribution
                        .as_ref()
                        .and_then(|d| match i {
                            2 => Some(d.mean),
                            3 => d.std_dev,
                            4 => Some(d.min),
                            5 => Some(d.q25),
                            6 => Some(d.median),
                            7 => Some(d.q75),
                            _ => Some(d.max),
                        })
                        .map_or_else(|| "NaN".to_string(), |v| format!("{:.2}", v)),
                };
                write!(f, "{:>12}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyObservation;
    use chrono::NaiveDate;

    fn series_with_precip(values: &[Option<f64>]) -> ObservationSeries {
        let start = NaiveDate::from_ymd_opt(1915, 1, 1).unwrap();
        ObservationSeries::from_records(
            values
                .iter()
                .enumerate()
                .map(|(i, &p)| {
                    DailyObservation::new(
                        start + chrono::Duration::days(i as i64),
                        p,
                        Some(10.0),
                        None,
                        Some(2.0),
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_describe_quartiles_and_spread() {
        let series = series_with_precip(&[Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)]);
        let summary = SeriesAnalyzer::new().describe(&series);

        let precip = summary.column(Variable::Precip).unwrap();
        assert_eq!(precip.count, 4);
        assert_eq!(precip.missing, 1);

        let dist = precip.distribution.as_ref().unwrap();
        assert_eq!(dist.mean, 2.5);
        assert_eq!(dist.min, 1.0);
        assert_eq!(dist.q25, 1.75);
        assert_eq!(dist.median, 2.5);
        assert_eq!(dist.q75, 3.25);
        assert_eq!(dist.max, 4.0);
        assert!((dist.std_dev.unwrap() - 1.290_994).abs() < 1e-6);
    }

    #[test]
    fn test_all_missing_column_has_no_distribution() {
        let series = series_with_precip(&[Some(1.0)]);
        let summary = SeriesAnalyzer::new().describe(&series);

        let min_temp = summary.column(Variable::MinTemp).unwrap();
        assert_eq!(min_temp.count, 0);
        assert!(min_temp.distribution.is_none());

        let precip = summary.column(Variable::Precip).unwrap();
        assert_eq!(precip.distribution.as_ref().unwrap().std_dev, None);
    }

    #[test]
    fn test_empty_series_summary_renders() {
        let summary = SeriesAnalyzer::new().describe(&ObservationSeries::new());
        assert_eq!(summary.total_records, 0);

        let text = summary.to_string();
        assert!(text.contains("Max Temp"));
        assert!(text.contains("NaN"));
    }
}
