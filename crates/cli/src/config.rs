//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CHECKIN_RADIUS_METERS` - Maximum GPS check-in distance (default: 50)
//! - `CHECKIN_DEFAULT_AREA_ID` - Area for checkpoints outside every polygon (default: default)
//! - `CHECKIN_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use marshal_checkin_core::AreaId;
use marshal_checkin_core::checkin::CheckInPolicy;
use thiserror::Error;

const DEFAULT_RADIUS_METERS: &str = "50";
const DEFAULT_AREA_ID: &str = "default";
const DEFAULT_LOG_FORMAT: &str = "pretty";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event, for log shipping.
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Maximum distance from a checkpoint for a GPS check-in
    pub check_in_radius_meters: f64,
    /// Area assigned to checkpoints no polygon contains
    pub default_area_id: AreaId,
    /// Log output format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let check_in_radius_meters = parse_radius(
            "CHECKIN_RADIUS_METERS",
            &get_env_or_default("CHECKIN_RADIUS_METERS", DEFAULT_RADIUS_METERS),
        )?;
        let default_area_id = parse_area_id(
            "CHECKIN_DEFAULT_AREA_ID",
            &get_env_or_default("CHECKIN_DEFAULT_AREA_ID", DEFAULT_AREA_ID),
        )?;
        let log_format = parse_log_format(
            "CHECKIN_LOG_FORMAT",
            &get_env_or_default("CHECKIN_LOG_FORMAT", DEFAULT_LOG_FORMAT),
        )?;

        Ok(Self {
            check_in_radius_meters,
            default_area_id,
            log_format,
        })
    }

    /// Check-in rules derived from this configuration.
    #[must_use]
    pub const fn check_in_policy(&self) -> CheckInPolicy {
        CheckInPolicy::new(self.check_in_radius_meters)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a radius: a finite, strictly positive number of meters.
fn parse_radius(var_name: &str, value: &str) -> Result<f64, ConfigError> {
    let radius = value
        .trim()
        .parse::<f64>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must be a positive number of meters (got {value})"),
        ));
    }
    Ok(radius)
}

fn parse_area_id(var_name: &str, value: &str) -> Result<AreaId, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(AreaId::new(value))
}

fn parse_log_format(var_name: &str, value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected 'pretty' or 'json' (got '{other}')"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_radius_valid() {
        assert!((parse_radius("R", "50").unwrap() - 50.0).abs() < f64::EPSILON);
        assert!((parse_radius("R", " 12.5 ").unwrap() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_radius_rejects_non_positive() {
        assert!(parse_radius("R", "0").is_err());
        assert!(parse_radius("R", "-10").is_err());
        assert!(parse_radius("R", "inf").is_err());
        assert!(parse_radius("R", "NaN").is_err());
    }

    #[test]
    fn test_parse_radius_rejects_garbage() {
        let err = parse_radius("CHECKIN_RADIUS_METERS", "fifty").unwrap_err();
        assert!(err.to_string().contains("CHECKIN_RADIUS_METERS"));
    }

    #[test]
    fn test_parse_area_id() {
        assert_eq!(parse_area_id("A", " default ").unwrap(), AreaId::new("default"));
        assert!(parse_area_id("A", "   ").is_err());
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!(parse_log_format("L", "JSON").unwrap(), LogFormat::Json);
        assert_eq!(parse_log_format("L", "pretty").unwrap(), LogFormat::Pretty);
        assert!(parse_log_format("L", "xml").is_err());
    }

    #[test]
    fn test_defaults_parse() {
        assert!(parse_radius("R", DEFAULT_RADIUS_METERS).is_ok());
        assert!(parse_area_id("A", DEFAULT_AREA_ID).is_ok());
        assert!(parse_log_format("L", DEFAULT_LOG_FORMAT).is_ok());
    }

    #[test]
    fn test_check_in_policy_uses_radius() {
        let config = CliConfig {
            check_in_radius_meters: 75.0,
            default_area_id: AreaId::new("default"),
            log_format: LogFormat::Pretty,
        };
        assert!((config.check_in_policy().radius_meters - 75.0).abs() < f64::EPSILON);
    }
}
