pub mod comparison_writer;
pub mod output;
pub mod report_writer;
pub mod series_writer;

pub use comparison_writer::ComparisonWriter;
pub use output::write_outputs;
pub use report_writer::{ReportFormat, ReportWriter};
pub use series_writer::SeriesWriter;
