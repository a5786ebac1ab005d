//! `ledgerly routes` and `ledgerly categories`

use crate::display::{format_category_palettes, format_route_table};
use crate::error::LedgerlyResult;

pub fn handle_routes_command() -> LedgerlyResult<()> {
    println!("{}", format_route_table());
    Ok(())
}

pub fn handle_categories_command(business: bool) -> LedgerlyResult<()> {
    println!("{}", format_category_palettes(business));
    Ok(())
}
