pub mod pipeline;
pub mod quality_check;
pub mod range_validator;
pub mod sentinel_resolver;
pub mod span_validator;
pub mod swap_corrector;

#[cfg(test)]
pub(crate) mod test_support;

pub use pipeline::{QcOutcome, QcPipeline, StageSummary};
pub use quality_check::QualityCheck;
pub use range_validator::RangeValidator;
pub use sentinel_resolver::SentinelResolver;
pub use span_validator::SpanValidator;
pub use swap_corrector::SwapCorrector;
