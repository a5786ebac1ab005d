//! Configuration module for Ledgerly
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerlyPaths;
pub use settings::Settings;
