//! Personal or business?

use crate::models::Mode;
use crate::routes::Route;
use crate::store::Store;

pub const CHOICES: [Mode; 2] = [Mode::Personal, Mode::Business];

#[derive(Debug, Clone, Default)]
pub struct ModeSelectionScreen {
    pub highlighted: usize,
}

impl ModeSelectionScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlighted_mode(&self) -> Mode {
        CHOICES[self.highlighted % CHOICES.len()]
    }

    pub fn toggle(&mut self) {
        self.highlighted = (self.highlighted + 1) % CHOICES.len();
    }

    /// Record the mode and send the user through that mode's onboarding
    pub fn select(&self, store: &mut Store, mode: Mode) -> Route {
        store.set_mode(mode);
        Route::onboarding_for(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_business() {
        let mut store = Store::new();
        let route = ModeSelectionScreen::new().select(&mut store, Mode::Business);
        assert_eq!(store.mode(), Mode::Business);
        assert_eq!(route, Route::BusinessOnboarding);
    }
}
