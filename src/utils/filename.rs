use crate::models::Variable;
use std::path::{Path, PathBuf};

/// File stem used for a variable's before/after comparison table
pub fn comparison_file_stem(variable: Variable) -> &'static str {
    match variable {
        Variable::Precip => "precipitation",
        Variable::MaxTemp => "max_air_temp",
        Variable::MinTemp => "min_air_temp",
        Variable::WindSpeed => "wind_speed",
    }
}

/// `<dir>/<stem>.csv`
pub fn comparison_path(dir: &Path, variable: Variable) -> PathBuf {
    dir.join(format!("{}.csv", comparison_file_stem(variable)))
}
