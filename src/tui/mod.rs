//! Terminal user interface
//!
//! A ratatui shell over the screen view-models: one view per route, a
//! navigation bar for the active mode, and a status line.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
