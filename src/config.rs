//! Application configuration.
//!
//! Handles loading and validating `config.toml`. Every setting has a stock
//! default, so the file is optional and may be sparse: override just the
//! values you want.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! database = "tanzil.db"   # Path to the SQLite database file
//!
//! [limits]
//! default_limit = 20       # Page size when a verse query names none
//! max_limit = 100          # Largest page size a verse query may request
//!
//! [output]
//! pretty = true            # Pretty-print JSON responses
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Application configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database")]
    pub database: String,
    /// Pagination bounds applied by the verse-list validator.
    pub limits: Limits,
    /// JSON output settings.
    pub output: OutputConfig,
}

fn default_database() -> String {
    "tanzil.db".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            limits: Limits::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.is_empty() {
            return Err(ConfigError::Validation(
                "database path must not be empty".into(),
            ));
        }
        if self.limits.max_limit == 0 {
            return Err(ConfigError::Validation(
                "limits.max_limit must be at least 1".into(),
            ));
        }
        if self.limits.default_limit == 0 || self.limits.default_limit > self.limits.max_limit {
            return Err(ConfigError::Validation(
                "limits.default_limit must be between 1 and limits.max_limit".into(),
            ));
        }
        Ok(())
    }
}

/// Pagination bounds for verse-list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Page size used when a query does not name one.
    pub default_limit: u32,
    /// Largest page size a query may request.
    pub max_limit: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

/// JSON output settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print JSON response bodies (two-space indent) instead of
    /// emitting them on one line.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from `config.toml` in the given directory.
///
/// Returns stock defaults if no `config.toml` exists. Rejects unknown keys
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        AppConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Tanzil Configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Path to the SQLite database file. Created by `tanzil seed`.
database = "tanzil.db"

# ---------------------------------------------------------------------------
# Pagination limits
# ---------------------------------------------------------------------------
[limits]
# Page size used when a verse query does not name one.
default_limit = 20

# Largest page size a verse query may request. Queries asking for more
# are rejected, not clamped.
max_limit = 100

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Pretty-print JSON responses (two-space indent).
# Set to false for compact single-line output.
pretty = true
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = AppConfig::default();
        assert_eq!(config.database, "tanzil.db");
        assert_eq!(config.limits.default_limit, 20);
        assert_eq!(config.limits.max_limit, 100);
        assert!(config.output.pretty);
    }

    #[test]
    fn parse_partial_config_preserves_defaults() {
        let toml = r#"
[limits]
max_limit = 50
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.limits.max_limit, 50);
        // Default values preserved
        assert_eq!(config.limits.default_limit, 20);
        assert_eq!(config.database, "tanzil.db");
        assert!(config.output.pretty);
    }

    #[test]
    fn parse_database_path() {
        let toml = r#"database = "data/quran.db""#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.database, "data/quran.db");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.database, "tanzil.db");
        assert_eq!(config.limits.default_limit, 20);
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
database = "corpus.db"

[output]
pretty = false
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.database, "corpus.db");
        assert!(!config.output.pretty);
        // Unspecified values should be defaults
        assert_eq!(config.limits.max_limit, 100);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[limits]
defualt_limit = 20
"#;
        let result: Result<AppConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let toml_str = r#"
[limitz]
max_limit = 100
"#;
        let result: Result<AppConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_database_path() {
        let mut config = AppConfig::default();
        config.database = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_zero_limits() {
        let mut config = AppConfig::default();
        config.limits.max_limit = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.limits.default_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_default_above_max() {
        let mut config = AppConfig::default();
        config.limits.default_limit = 101;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_limit"));
    }

    #[test]
    fn validate_default_equal_to_max_is_ok() {
        let mut config = AppConfig::default();
        config.limits.default_limit = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[limits]
default_limit = 0
"#,
        )
        .unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let content = stock_config_toml();
        let config: AppConfig = toml::from_str(content).unwrap();
        assert_eq!(config.database, "tanzil.db");
        assert_eq!(config.limits.default_limit, 20);
        assert_eq!(config.limits.max_limit, 100);
        assert!(config.output.pretty);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("database ="));
        assert!(content.contains("[limits]"));
        assert!(content.contains("[output]"));
    }
}
