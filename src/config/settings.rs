//! User settings for Ledgerly
//!
//! Preferences only: default currency, assistant pacing, the local sign-in
//! code and logging verbosity. No ledger data is ever written here.

use serde::{Deserialize, Serialize};

use super::paths::LedgerlyPaths;
use crate::error::LedgerlyError;

/// User settings for Ledgerly
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code preselected during onboarding
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Delay before the assistant's canned reply appears
    #[serde(default = "default_assistant_delay_ms")]
    pub assistant_delay_ms: u64,

    /// TUI tick rate
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Code accepted by the bundled local identity provider
    #[serde(default = "default_verification_code")]
    pub demo_verification_code: String,

    /// Default tracing filter directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many entries the dashboards list as "recent"
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_assistant_delay_ms() -> u64 {
    1500
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_verification_code() -> String {
    "123456".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_limit() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            assistant_delay_ms: default_assistant_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            demo_verification_code: default_verification_code(),
            log_level: default_log_level(),
            date_format: default_date_format(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerlyPaths) -> Result<Self, LedgerlyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerlyError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerlyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerlyPaths) -> Result<(), LedgerlyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerlyError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LedgerlyError::Io(format!("Failed to write settings file: {}", e))
        })?;

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
        assert_eq!(settings.default_currency, "USD");
        assert_eq!(settings.assistant_delay_ms, 1500);
        assert_eq!(settings.recent_limit, 5);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerlyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_currency = "INR".into();
        settings.assistant_delay_ms = 10;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_currency, "INR");
        assert_eq!(loaded.assistant_delay_ms, 10);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"log_level":"debug"}"#).unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.demo_verification_code, "123456");
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerlyError::Config(_)));
    }
}
