use chrono::NaiveDate;
use climate_qc::models::{AuditLedger, DailyObservation, ObservationSeries};
use climate_qc::processors::{QcPipeline, QualityCheck, RangeValidator};
use climate_qc::readers::ObservationReader;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Synthetic daily series with a sprinkling of sentinels, gross errors and swaps
fn create_test_series(days: usize) -> ObservationSeries {
    let base_date = NaiveDate::from_ymd_opt(1915, 1, 1).unwrap();
    let records = (0..days)
        .map(|day| {
            let date = base_date + chrono::Duration::days(day as i64);
            let base_temp = 10.0 + (day % 30) as f64 * 0.5;

            let precip = if day % 17 == 0 { -999.0 } else { (day % 7) as f64 };
            let (max_temp, min_temp) = if day % 11 == 0 {
                (base_temp - 5.0, base_temp + 5.0)
            } else if day % 13 == 0 {
                (base_temp + 28.0, base_temp)
            } else {
                (base_temp + 5.0, base_temp - 5.0)
            };
            let wind = if day % 19 == 0 { 12.0 } else { 3.5 };

            DailyObservation::new(date, Some(precip), Some(max_temp), Some(min_temp), Some(wind))
        })
        .collect();

    ObservationSeries::from_records(records).unwrap()
}

fn create_test_text(days: usize) -> String {
    let series = create_test_series(days);
    series
        .iter()
        .map(|r| {
            format!(
                "{} {} {} {} {}\n",
                r.date(),
                r.precip.unwrap_or(-999.0),
                r.max_temp.unwrap_or(-999.0),
                r.min_temp.unwrap_or(-999.0),
                r.wind_speed.unwrap_or(-999.0)
            )
        })
        .collect()
}

fn benchmark_loader(c: &mut Criterion) {
    let text = create_test_text(3650);

    c.bench_function("loader_parse_10_years", |b| {
        b.iter(|| {
            let series = ObservationReader::new().parse_str(black_box(&text)).unwrap();
            black_box(series.len())
        })
    });
}

fn benchmark_range_validator(c: &mut Criterion) {
    let series = create_test_series(3650);

    c.bench_function("range_validator", |b| {
        b.iter(|| {
            let (checked, ledger) =
                RangeValidator::new().apply(black_box(series.clone()), AuditLedger::new());
            black_box((checked.len(), ledger))
        })
    });
}

fn benchmark_pipeline_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_by_size");
    let pipeline = QcPipeline::new();

    for &years in &[1, 10, 50] {
        group.bench_with_input(BenchmarkId::new("years", years), &years, |b, &years| {
            let series = create_test_series(years * 365);
            b.iter(|| {
                let outcome = pipeline.run(black_box(series.clone()), AuditLedger::new(), None);
                black_box(outcome.ledger)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_loader,
    benchmark_range_validator,
    benchmark_pipeline_by_size
);
criterion_main!(benches);
