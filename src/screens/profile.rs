//! Profile screen: session actions for either mode

use std::path::PathBuf;

use chrono::Utc;
use tracing::info;

use crate::config::LedgerlyPaths;
use crate::error::LedgerlyResult;
use crate::export::{export_to_dir, ExportFormat};
use crate::models::Mode;
use crate::routes::Route;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    SwitchMode,
    ExportData,
    LogOut,
}

impl ProfileAction {
    pub const ALL: [ProfileAction; 3] = [Self::SwitchMode, Self::ExportData, Self::LogOut];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SwitchMode => "Switch mode",
            Self::ExportData => "Export Data",
            Self::LogOut => "Log out",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileScreen {
    pub selected: usize,
    format_index: usize,
    pub last_export: Option<PathBuf>,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            selected: 0,
            format_index: 0,
            last_export: None,
        }
    }

    pub fn selected_action(&self) -> ProfileAction {
        ProfileAction::ALL[self.selected % ProfileAction::ALL.len()]
    }

    pub fn move_selection(&mut self, forward: bool) {
        self.selected = super::onboarding::cycle(self.selected, ProfileAction::ALL.len(), forward);
    }

    pub fn export_format(&self) -> ExportFormat {
        ExportFormat::ALL[self.format_index % ExportFormat::ALL.len()]
    }

    pub fn cycle_format(&mut self) {
        self.format_index = (self.format_index + 1) % ExportFormat::ALL.len();
    }

    /// Keep the session, pick a mode again
    pub fn switch_mode(&self) -> Route {
        Route::ModeSelection
    }

    /// Clear the session flags and the active mode's profile
    pub fn log_out(&self, store: &mut Store) -> Route {
        match store.mode() {
            Mode::Personal => store.set_user_profile(None),
            Mode::Business => store.set_business_profile(None),
            Mode::None => {}
        }
        store.set_authenticated(false);
        store.set_mode(Mode::None);
        info!("Logged out");
        Route::Auth
    }

    pub fn export(&mut self, store: &Store, paths: &LedgerlyPaths) -> LedgerlyResult<PathBuf> {
        let path = export_to_dir(store, paths, self.export_format(), Utc::now())?;
        self.last_export = Some(path.clone());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use tempfile::TempDir;

    fn profile() -> UserProfile {
        UserProfile {
            full_name: "Asha Verma".into(),
            profile_picture: None,
            currency: "INR".into(),
            occupation: "Engineer".into(),
            phone: String::new(),
            email: String::new(),
        }
    }

    #[test]
    fn test_log_out_clears_session() {
        let mut store = Store::new();
        store.set_authenticated(true);
        store.set_mode(Mode::Personal);
        store.set_user_profile(Some(profile()));

        let route = ProfileScreen::new().log_out(&mut store);

        assert_eq!(route, Route::Auth);
        assert!(!store.is_authenticated());
        assert_eq!(store.mode(), Mode::None);
        assert!(store.user_profile().is_none());
    }

    #[test]
    fn test_switch_mode_keeps_profile() {
        let mut store = Store::new();
        store.set_mode(Mode::Personal);
        store.set_user_profile(Some(profile()));
        assert_eq!(ProfileScreen::new().switch_mode(), Route::ModeSelection);
        assert!(store.user_profile().is_some());
    }

    #[test]
    fn test_export_records_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new();
        let mut screen = ProfileScreen::new();
        screen.cycle_format();
        assert_eq!(screen.export_format(), ExportFormat::Json);

        let path = screen.export(&store, &paths).unwrap();
        assert!(path.exists());
        assert_eq!(screen.last_export, Some(path));
    }

    #[test]
    fn test_selection_wraps() {
        let mut screen = ProfileScreen::new();
        screen.move_selection(false);
        assert_eq!(screen.selected_action(), ProfileAction::LogOut);
    }
}
