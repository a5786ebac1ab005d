//! Navigation table for `ledgerly routes`

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::routes::{nav_items, Route};

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "Path")]
    path: &'static str,
    #[tabled(rename = "Screen")]
    title: &'static str,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Key")]
    key: String,
}

pub fn format_route_table() -> String {
    let rows: Vec<RouteRow> = Route::ALL
        .iter()
        .map(|route| {
            let key = nav_items(route.mode())
                .iter()
                .find(|item| item.route == *route)
                .map(|item| item.key.to_string())
                .unwrap_or_default();
            RouteRow {
                path: route.path(),
                title: route.title(),
                mode: route.mode().to_string(),
                key,
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}
