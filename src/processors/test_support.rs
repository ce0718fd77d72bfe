use crate::models::{DailyObservation, ObservationSeries};
use chrono::{Duration, NaiveDate};

/// Consecutive daily records starting 1915-01-01
pub fn series(rows: &[[Option<f64>; 4]]) -> ObservationSeries {
    let start = NaiveDate::from_ymd_opt(1915, 1, 1).unwrap();
    ObservationSeries::from_records(
        rows.iter()
            .enumerate()
            .map(|(i, values)| {
                DailyObservation::from_values(start + Duration::days(i as i64), *values)
            })
            .collect(),
    )
    .unwrap()
}

/// A record with every field present
pub fn full(precip: f64, max_temp: f64, min_temp: f64, wind_speed: f64) -> [Option<f64>; 4] {
    [Some(precip), Some(max_temp), Some(min_temp), Some(wind_speed)]
}
