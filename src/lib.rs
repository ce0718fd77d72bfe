pub mod analyzers;
pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod settings;
pub mod utils;
pub mod writers;

pub use error::{QcError, Result};
pub use models::{AuditLedger, ObservationSeries, Rule, Variable};
pub use processors::{QcOutcome, QcPipeline};
