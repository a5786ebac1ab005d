//! Application context
//!
//! The context is built once at startup and handed by reference to every
//! screen. The store inside it only exists after `initialize`; reaching for
//! it earlier is a configuration error, not an empty store.

use crate::config::{LedgerlyPaths, Settings};
use crate::error::{LedgerlyError, LedgerlyResult};

use super::Store;

#[derive(Debug)]
pub struct AppContext {
    settings: Settings,
    paths: LedgerlyPaths,
    store: Option<Store>,
}

impl AppContext {
    /// A context whose store has not been created yet
    pub fn uninitialized(settings: Settings, paths: LedgerlyPaths) -> Self {
        Self {
            settings,
            paths,
            store: None,
        }
    }

    /// A context with a fresh, empty store
    pub fn new(settings: Settings, paths: LedgerlyPaths) -> Self {
        let mut context = Self::uninitialized(settings, paths);
        context.initialize();
        context
    }

    /// Create the store. Calling this again keeps the existing store.
    pub fn initialize(&mut self) {
        if self.store.is_none() {
            tracing::debug!("Initialising session store");
            self.store = Some(Store::new());
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> LedgerlyResult<&Store> {
        self.store.as_ref().ok_or(LedgerlyError::NotInitialized)
    }

    pub fn store_mut(&mut self) -> LedgerlyResult<&mut Store> {
        self.store.as_mut().ok_or(LedgerlyError::NotInitialized)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn paths(&self) -> &LedgerlyPaths {
        &self.paths
    }
}
