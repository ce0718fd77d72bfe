pub mod ledger;
pub mod observation;

pub use ledger::{AuditLedger, LedgerReport, LedgerRow, Rule, VariableCounts};
pub use observation::{DailyObservation, ObservationSeries, Variable};
