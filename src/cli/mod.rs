//! CLI command handlers
//!
//! One-shot commands that run without the TUI, bridging clap argument
//! parsing with the assistant, routing table and settings.

pub mod ask;
pub mod config;
pub mod reference;

pub use ask::{handle_ask_command, AskArgs};
pub use config::handle_config_command;
pub use reference::{handle_categories_command, handle_routes_command};
