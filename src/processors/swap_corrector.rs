use crate::models::{ObservationSeries, Rule, VariableCounts};
use crate::processors::quality_check::QualityCheck;

/// Swaps max and min temperature on days where max < min.
///
/// Days with either temperature missing are left alone.
pub struct SwapCorrector;

impl SwapCorrector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SwapCorrector {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityCheck for SwapCorrector {
    fn rule(&self) -> Rule {
        Rule::Swapped
    }

    fn description(&self) -> &'static str {
        "Correcting swapped temperatures"
    }

    fn check(&self, series: &mut ObservationSeries) -> VariableCounts {
        let mut swapped = 0;

        for record in series.iter_mut() {
            if let Some((max, min)) = record.temperature_pair() {
                if max < min {
                    record.swap_temperatures();
                    swapped += 1;
                }
            }
        }

        VariableCounts::temperature_pair(swapped)
    }
}
