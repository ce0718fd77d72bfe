use crate::models::{AuditLedger, ObservationSeries, Rule, VariableCounts};
use tracing::debug;

/// One stage of the quality control pipeline.
///
/// A stage mutates the series and reports how many values it affected per
/// variable. `apply` threads ownership of the series and ledger through the
/// stage and writes the stage's ledger row.
pub trait QualityCheck {
    fn rule(&self) -> Rule;

    /// Human readable stage description for progress output
    fn description(&self) -> &'static str;

    fn check(&self, series: &mut ObservationSeries) -> VariableCounts;

    fn apply(
        &self,
        mut series: ObservationSeries,
        mut ledger: AuditLedger,
    ) -> (ObservationSeries, AuditLedger) {
        let counts = self.check(&mut series);
        debug!("{} check counts: {:?}", self.rule(), counts.as_array());
        ledger.set_row(self.rule(), counts);
        (series, ledger)
    }
}
