//! Display formatting for terminal output
//!
//! Plain-text rows for ledger lists and `tabled` tables for the CLI.

pub mod category;
pub mod ledger;
pub mod routes;

pub use category::format_category_palettes;
pub use ledger::{format_entry_row, format_signed, format_transaction_row, truncate};
pub use routes::format_route_table;
