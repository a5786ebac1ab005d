//! Ledgerly - personal and business finance tracking in the terminal
//!
//! A single session holds everything: sign-in state, the chosen mode, the
//! onboarding profile and every ledger. Only settings touch the disk.
//!
//! # Architecture
//!
//! - `config`: paths and settings
//! - `error`: the crate error type
//! - `models`: transactions, budgets, catalog items, entries, investments, profiles
//! - `store`: the session state container
//! - `services`: derived figures (summaries, budget status, analysis)
//! - `screens`: view-models behind each screen
//! - `tui`: the ratatui shell that renders them
//! - `cli`: one-shot commands
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerly::models::{Money, NewTransaction};
//! use ledgerly::store::Store;
//!
//! let mut store = Store::new();
//! store.add_transaction(NewTransaction::income("Salary", Money::from_units(5000), today));
//! ```

pub mod assistant;
pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod routes;
pub mod screens;
pub mod services;
pub mod store;
pub mod tasks;
pub mod tui;

pub use error::{LedgerlyError, LedgerlyResult};
