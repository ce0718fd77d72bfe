use crate::models::{ObservationSeries, Rule, Variable, VariableCounts};
use crate::processors::quality_check::QualityCheck;
use tracing::debug;

/// Gross error check: values outside a variable's physical range are removed.
///
/// Each variable is checked on its own. Missing values are never out of range.
pub struct RangeValidator;

impl RangeValidator {
    pub fn new() -> Self {
        Self
    }

    /// True when a present value falls outside the variable's bounds
    pub fn is_gross_error(variable: Variable, value: Option<f64>) -> bool {
        value.is_some_and(|v| !variable.valid_range().contains(&v))
    }
}

impl Default for RangeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityCheck for RangeValidator {
    fn rule(&self) -> Rule {
        Rule::GrossError
    }

    fn description(&self) -> &'static str {
        "Removing gross errors"
    }

    fn check(&self, series: &mut ObservationSeries) -> VariableCounts {
        let mut counts = VariableCounts::default();

        for variable in Variable::ALL {
            let mut removed = 0;
            for record in series.iter_mut() {
                let value = record.get_mut(variable);
                if Self::is_gross_error(variable, *value) {
                    *value = None;
                    removed += 1;
                }
            }

            if removed > 0 {
                let range = variable.valid_range();
                debug!(
                    "{} values of {} outside [{}, {}] {}",
                    removed,
                    variable,
                    range.start(),
                    range.end(),
                    variable.units()
                );
            }
            counts.set(variable, removed);
        }

        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuditLedger;
    use crate::processors::test_support::{full, series};

    #[test]
    fn test_out_of_range_values_removed() {
        let input = series(&[[None, Some(40.0), Some(-30.0), Some(5.0)]]);

        let (output, ledger) = RangeValidator::new().apply(input, AuditLedger::new());
        let record = &output.records()[0];

        assert_eq!(record.max_temp, None);
        assert_eq!(record.min_temp, None);
        assert_eq!(record.wind_speed, Some(5.0));
        assert_eq!(ledger.row(Rule::GrossError).as_array(), [0, 1, 1, 0]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let input = series(&[
            full(0.0, 35.0, -25.0, 0.0),
            full(25.0, -25.0, 35.0, 10.0),
        ]);

        let (output, ledger) = RangeValidator::new().apply(input.clone(), AuditLedger::new());

        assert_eq!(output, input);
        assert_eq!(ledger.row(Rule::GrossError).total(), 0);
    }

    #[test]
    fn test_each_bound_violation_counted_per_variable() {
        let input = series(&[
            full(-0.1, 10.0, 5.0, 10.5),
            full(25.1, 35.1, -25.1, -1.0),
            full(3.0, 10.0, 5.0, 2.0),
        ]);

        let (output, ledger) = RangeValidator::new().apply(input, AuditLedger::new());

        assert_eq!(ledger.row(Rule::GrossError).as_array(), [2, 1, 1, 2]);
        assert_eq!(output.records()[0].max_temp, Some(10.0));
        assert_eq!(output.records()[2].precip, Some(3.0));
    }

    #[test]
    fn test_postcondition_no_value_out_of_bounds() {
        let input = series(&[
            full(100.0, 60.0, -60.0, 50.0),
            [None, Some(12.0), None, Some(-3.0)],
            full(12.0, 20.0, 10.0, 4.0),
        ]);

        let (output, _) = RangeValidator::new().apply(input, AuditLedger::new());

        for record in output.iter() {
            for variable in Variable::ALL {
                if let Some(value) = record.get(variable) {
                    assert!(variable.valid_range().contains(&value));
                }
            }
        }
    }

    #[test]
    fn test_missing_is_never_gross_error() {
        assert!(!RangeValidator::is_gross_error(Variable::Precip, None));
        assert!(RangeValidator::is_gross_error(Variable::Precip, Some(-1.0)));
    }
}
