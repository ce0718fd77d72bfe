use crate::models::{ObservationSeries, Rule, Variable, VariableCounts};
use crate::processors::quality_check::QualityCheck;
use crate::utils::constants::NO_DATA_SENTINEL;

/// Replaces the raw no-data sentinel with a missing value.
///
/// The ledger row holds the total number of missing values per variable once
/// substitution is done, so values that were already missing are included.
pub struct SentinelResolver {
    sentinel: f64,
}

impl SentinelResolver {
    pub fn new() -> Self {
        Self {
            sentinel: NO_DATA_SENTINEL,
        }
    }
}

impl Default for SentinelResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityCheck for SentinelResolver {
    fn rule(&self) -> Rule {
        Rule::NoData
    }

    fn description(&self) -> &'static str {
        "Resolving no-data values"
    }

    fn check(&self, series: &mut ObservationSeries) -> VariableCounts {
        for record in series.iter_mut() {
            for variable in Variable::ALL {
                let value = record.get_mut(variable);
                if *value == Some(self.sentinel) {
                    *value = None;
                }
            }
        }

        VariableCounts::new(series.missing_counts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuditLedger;
    use crate::processors::test_support::series;

    #[test]
    fn test_sentinel_becomes_missing() {
        let input = series(&[
            [Some(-999.0), Some(40.0), Some(-30.0), Some(5.0)],
            [Some(1.0), Some(-999.0), Some(-999.0), Some(2.0)],
        ]);

        let (output, ledger) = SentinelResolver::new().apply(input, AuditLedger::new());

        assert_eq!(output.records()[0].precip, None);
        assert_eq!(output.records()[0].max_temp, Some(40.0));
        assert_eq!(output.records()[1].max_temp, None);
        assert_eq!(ledger.row(Rule::NoData).as_array(), [1, 1, 1, 0]);
    }

    #[test]
    fn test_count_includes_preexisting_missing() {
        let input = series(&[
            [None, Some(10.0), Some(5.0), Some(1.0)],
            [Some(-999.0), Some(10.0), Some(5.0), Some(1.0)],
        ]);

        let (_, ledger) = SentinelResolver::new().apply(input, AuditLedger::new());

        assert_eq!(ledger.count(Rule::NoData, Variable::Precip), 2);
    }

    #[test]
    fn test_only_exact_sentinel_matches() {
        let input = series(&[[Some(-999.5), Some(-99.9), Some(-9999.0), Some(0.0)]]);

        let (output, ledger) = SentinelResolver::new().apply(input.clone(), AuditLedger::new());

        assert_eq!(output, input);
        assert_eq!(ledger.row(Rule::NoData).total(), 0);
    }

    #[test]
    fn test_second_run_reports_same_row() {
        let input = series(&[
            [Some(-999.0), Some(10.0), None, Some(-999.0)],
            [Some(3.0), Some(-999.0), Some(2.0), Some(4.0)],
        ]);
        let resolver = SentinelResolver::new();

        let (once, ledger) = resolver.apply(input, AuditLedger::new());
        let first_row = ledger.row(Rule::NoData);
        let (twice, ledger) = resolver.apply(once.clone(), ledger);

        assert_eq!(twice, once);
        assert_eq!(ledger.row(Rule::NoData), first_row);
    }
}
