use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_CLEANED_FILE, DEFAULT_REPORT_FILE, ENV_PREFIX, REPORT_FORMAT_TABLE,
};
use crate::writers::ReportFormat;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

/// Output locations for a run. The quality control thresholds are fixed
/// constants and are not settable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QcSettings {
    #[validate(custom(function = "validate_output_path"))]
    pub cleaned_output: PathBuf,

    #[validate(custom(function = "validate_output_path"))]
    pub report_output: PathBuf,

    pub report_format: ReportFormat,

    pub comparison_dir: Option<PathBuf>,
}

/// Values given on the command line; `None` leaves the layered value alone
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub cleaned_output: Option<PathBuf>,
    pub report_output: Option<PathBuf>,
    pub report_format: Option<ReportFormat>,
    pub comparison_dir: Option<PathBuf>,
}

fn validate_output_path(path: &Path) -> std::result::Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_path"));
    }
    Ok(())
}

impl QcSettings {
    /// Defaults, then the optional settings file, then `CLIMATE_QC_*` variables
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("cleaned_output", DEFAULT_CLEANED_FILE)?
            .set_default("report_output", DEFAULT_REPORT_FILE)?
            .set_default("report_format", REPORT_FORMAT_TABLE)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }

        let settings: QcSettings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Apply command line values on top and re-validate
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Result<Self> {
        if let Some(path) = overrides.cleaned_output {
            self.cleaned_output = path;
        }
        if let Some(path) = overrides.report_output {
            self.report_output = path;
        }
        if let Some(format) = overrides.report_format {
            self.report_format = format;
        }
        if overrides.comparison_dir.is_some() {
            self.comparison_dir = overrides.comparison_dir;
        }

        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QcError;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let settings = QcSettings::load(None).unwrap();

        assert_eq!(settings.cleaned_output, PathBuf::from(DEFAULT_CLEANED_FILE));
        assert_eq!(settings.report_output, PathBuf::from(DEFAULT_REPORT_FILE));
        assert_eq!(settings.report_format, ReportFormat::Table);
        assert!(settings.comparison_dir.is_none());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "report_output = \"checks.json\"").unwrap();
        writeln!(file, "report_format = \"json\"").unwrap();
        writeln!(file, "comparison_dir = \"plots\"").unwrap();

        let settings = QcSettings::load(Some(file.path())).unwrap();

        assert_eq!(settings.report_output, PathBuf::from("checks.json"));
        assert_eq!(settings.report_format, ReportFormat::Json);
        assert_eq!(settings.comparison_dir, Some(PathBuf::from("plots")));
        assert_eq!(settings.cleaned_output, PathBuf::from(DEFAULT_CLEANED_FILE));
    }

    #[test]
    fn test_unknown_report_format_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "report_format = \"xml\"").unwrap();

        let err = QcSettings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, QcError::Config(_)));
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let settings = QcSettings::load(None).unwrap();
        let err = settings
            .with_overrides(SettingsOverrides {
                cleaned_output: Some(PathBuf::new()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, QcError::Validation(_)));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let settings = QcSettings::load(None)
            .unwrap()
            .with_overrides(SettingsOverrides {
                report_output: Some(PathBuf::from("out/report.txt")),
                report_format: Some(ReportFormat::Json),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(settings.report_output, PathBuf::from("out/report.txt"));
        assert_eq!(settings.report_format, ReportFormat::Json);
        assert_eq!(settings.cleaned_output, PathBuf::from(DEFAULT_CLEANED_FILE));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_override_kept_verbatim() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = PathBuf::from(OsStr::from_bytes(b"out/clean\xff.txt"));
        let settings = QcSettings::load(None)
            .unwrap()
            .with_overrides(SettingsOverrides {
                cleaned_output: Some(raw.clone()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(settings.cleaned_output, raw);
    }
}
