//! Path management for Ledgerly
//!
//! Ledgerly keeps no domain data on disk. The only files it touches are the
//! settings file, the diagnostic log and explicit exports.
//!
//! ## Path Resolution Order
//!
//! 1. `LEDGERLY_HOME` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::LedgerlyError;

/// Manages all paths used by Ledgerly
#[derive(Debug, Clone)]
pub struct LedgerlyPaths {
    base_dir: PathBuf,
}

impl LedgerlyPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, LedgerlyError> {
        let base_dir = if let Ok(custom) = std::env::var("LEDGERLY_HOME") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "ledgerly")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    LedgerlyError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the diagnostic log written while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("ledgerly.log")
    }

    /// Directory that receives "Export Data" output
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), LedgerlyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerlyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| LedgerlyError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerlyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerlyPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.export_dir().exists());
    }
}
