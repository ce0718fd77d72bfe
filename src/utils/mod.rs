pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::{comparison_file_stem, comparison_path};
pub use progress::ProgressReporter;
