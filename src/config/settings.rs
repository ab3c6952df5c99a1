//! User settings for the expense tracker
//!
//! Display preferences, the default category for quick entries and the
//! budget warning threshold.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::DEFAULT_WARNING_PERCENT;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Category used when a quick entry has no `category:` tag
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Percentage of the budget at which to warn
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold_percent: u8,

    /// Number of rows `list` shows unless told otherwise
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_category() -> String {
    "General".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_warning_threshold() -> u8 {
    DEFAULT_WARNING_PERCENT
}

fn default_list_limit() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_category: default_category(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            warning_threshold_percent: default_warning_threshold(),
            list_limit: default_list_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    ///
    /// Nothing is written; `save` persists the settings.
    pub fn load_or_default(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !(1..=100).contains(&self.warning_threshold_percent) {
            return Err(TrackerError::Config(format!(
                "warning_threshold_percent must be between 1 and 100, got {}",
                self.warning_threshold_percent
            )));
        }
        if self.default_category.trim().is_empty() {
            return Err(TrackerError::Config(
                "default_category cannot be empty".into(),
            ));
        }
        // Time specifiers parse fine but fail when applied to a date
        let mut rendered = String::new();
        if write!(rendered, "{}", NaiveDate::MIN.format(&self.date_format)).is_err() {
            return Err(TrackerError::Config(format!(
                "date_format is not a valid date pattern: {}",
                self.date_format
            )));
        }
        if self.list_limit == 0 {
            return Err(TrackerError::Config("list_limit must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_category, "General");
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.warning_threshold_percent, 80);
        assert_eq!(settings.list_limit, 20);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());

        let settings = Settings {
            default_category: "Misc".into(),
            warning_threshold_percent: 90,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.default_category, "General");
    }

    #[test]
    fn test_validate_threshold_range() {
        for bad in [0u8, 101] {
            let settings = Settings {
                warning_threshold_percent: bad,
                ..Settings::default()
            };
            assert!(matches!(settings.validate(), Err(TrackerError::Config(_))));
        }
    }

    #[test]
    fn test_validate_date_format() {
        let settings = Settings {
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());

        for bad in ["%Q", "%Y-%m-%d %H:%M", "%T"] {
            let settings = Settings {
                date_format: bad.into(),
                ..Settings::default()
            };
            assert!(
                matches!(settings.validate(), Err(TrackerError::Config(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_load_rejects_time_format() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Y-%m-%d %H:%M"}"#).unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(err.to_string().contains("date_format"));
    }
}
