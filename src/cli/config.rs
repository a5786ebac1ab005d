//! `ledgerly config`: where things live and what the settings are
//!
//! Writes the defaults out on first run so there is a file to edit.

use tracing::info;

use crate::config::{LedgerlyPaths, Settings};
use crate::error::LedgerlyResult;

pub fn handle_config_command(paths: &LedgerlyPaths, settings: &Settings) -> LedgerlyResult<()> {
    if !paths.settings_file().exists() {
        settings.save(paths)?;
        info!(path = %paths.settings_file().display(), "Wrote default settings");
    }

    println!("Ledgerly Configuration");
    println!("======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Default currency:  {}", settings.default_currency);
    println!("  Assistant delay:   {} ms", settings.assistant_delay_ms);
    println!("  Tick rate:         {} ms", settings.tick_rate_ms);
    println!("  Log level:         {}", settings.log_level);
    println!("  Date format:       {}", settings.date_format);
    println!("  Recent entries:    {}", settings.recent_limit);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_run_writes_settings() {
        let temp = TempDir::new().unwrap();
        let paths = LedgerlyPaths::with_base_dir(temp.path().to_path_buf());
        let settings = Settings::default();

        handle_config_command(&paths, &settings).unwrap();
        assert!(paths.settings_file().exists());

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.default_currency, settings.default_currency);
    }
}
