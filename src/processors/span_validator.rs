use crate::models::{ObservationSeries, Rule, VariableCounts};
use crate::processors::quality_check::QualityCheck;
use crate::utils::constants::MAX_TEMP_SPAN;

/// Removes both temperatures on days whose max - min span is implausible.
///
/// Must run after `SwapCorrector` so spans are taken on corrected pairs.
pub struct SpanValidator {
    max_span: f64,
}

impl SpanValidator {
    pub fn new() -> Self {
        Self {
            max_span: MAX_TEMP_SPAN,
        }
    }
}

impl Default for SpanValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityCheck for SpanValidator {
    fn rule(&self) -> Rule {
        Rule::Range
    }

    fn description(&self) -> &'static str {
        "Checking temperature span"
    }

    fn check(&self, series: &mut ObservationSeries) -> VariableCounts {
        let mut removed = 0;

        for record in series.iter_mut() {
            if let Some((max, min)) = record.temperature_pair() {
                if max - min > self.max_span {
                    record.clear_temperatures();
                    removed += 1;
                }
            }
        }

        VariableCounts::temperature_pair(removed)
    }
}
