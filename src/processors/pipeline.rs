use crate::analyzers::{SeriesAnalyzer, SeriesSummary};
use crate::models::{AuditLedger, ObservationSeries};
use crate::processors::quality_check::QualityCheck;
use crate::processors::{RangeValidator, SentinelResolver, SpanValidator, SwapCorrector};
use crate::utils::progress::ProgressReporter;
use tracing::info;

/// Series statistics captured after a pipeline stage
#[derive(Debug, Clone)]
pub struct StageSummary {
    pub stage: String,
    pub summary: SeriesSummary,
}

/// Everything a run produces: the series as parsed, the cleaned series and
/// the filled ledger
#[derive(Debug, Clone)]
pub struct QcOutcome {
    pub raw: ObservationSeries,
    pub cleaned: ObservationSeries,
    pub ledger: AuditLedger,
    pub stages: Vec<StageSummary>,
}

/// Runs the quality checks in a fixed order
pub struct QcPipeline {
    checks: Vec<Box<dyn QualityCheck>>,
    analyzer: SeriesAnalyzer,
}

impl QcPipeline {
    /// No data, gross error, swapped, range
    pub fn new() -> Self {
        Self {
            checks: vec![
                Box::new(SentinelResolver::new()),
                Box::new(RangeValidator::new()),
                Box::new(SwapCorrector::new()),
                Box::new(SpanValidator::new()),
            ],
            analyzer: SeriesAnalyzer::new(),
        }
    }

    pub fn stage_count(&self) -> usize {
        self.checks.len()
    }

    pub fn run(
        &self,
        raw: ObservationSeries,
        ledger: AuditLedger,
        progress: Option<&ProgressReporter>,
    ) -> QcOutcome {
        let mut stages = vec![StageSummary {
            stage: "Raw data".to_string(),
            summary: self.analyzer.describe(&raw),
        }];

        let mut series = raw.clone();
        let mut ledger = ledger;

        for check in &self.checks {
            if let Some(p) = progress {
                p.set_message(check.description());
            }

            (series, ledger) = check.apply(series, ledger);

            let rule = check.rule();
            match ledger.paired_records(rule) {
                Some(records) => info!("{} check changed {} record(s)", rule, records),
                None => info!(
                    "{} check counted {} value(s)",
                    rule,
                    ledger.affected_values(rule)
                ),
            }

            stages.push(StageSummary {
                stage: rule.label().to_string(),
                summary: self.analyzer.describe(&series),
            });

            if let Some(p) = progress {
                p.increment(1);
            }
        }

        QcOutcome {
            raw,
            cleaned: series,
            ledger,
            stages,
        }
    }
}

impl Default for QcPipeline {
    fn default() -> Self {
        Self::new()
    }
}
