/// Raw-file value marking a missing observation
pub const NO_DATA_SENTINEL: f64 = -999.0;

/// Token written for missing values in the cleaned series
pub const MISSING_TOKEN: &str = "NaN";

/// Precipitation bounds (mm)
pub const MIN_VALID_PRECIP: f64 = 0.0;
pub const MAX_VALID_PRECIP: f64 = 25.0;

/// Air temperature bounds (°C), shared by max and min
pub const MIN_VALID_TEMP: f64 = -25.0;
pub const MAX_VALID_TEMP: f64 = 35.0;

/// Wind speed bounds (m/s)
pub const MIN_VALID_WIND: f64 = 0.0;
pub const MAX_VALID_WIND: f64 = 10.0;

/// Largest plausible daily max - min temperature span (°C)
pub const MAX_TEMP_SPAN: f64 = 25.0;

/// Accepted input date formats, tried in order
pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Output date format
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// File names
pub const DEFAULT_CLEANED_FILE: &str = "After_DataQualityCheck.txt";
pub const DEFAULT_REPORT_FILE: &str = "Failed_Checks.txt";

/// Settings environment prefix (CLIMATE_QC_REPORT_FORMAT etc.)
pub const ENV_PREFIX: &str = "CLIMATE_QC";

/// Report format used when none is configured
pub const REPORT_FORMAT_TABLE: &str = "table";

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
